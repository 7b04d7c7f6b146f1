use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use board_core::{update, AppState, LoadPhase, Msg};
use board_engine::FetchSettings;
use board_logging::{board_info, board_warn};

use super::config::{load_config, ConfigSource, DEFAULT_CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::input::{parse_command, Command};
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
    let (config, source) = load_config(&config_path)?;

    logging::initialize(if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });
    match source {
        ConfigSource::File => board_info!("Using config {:?}", config_path),
        ConfigSource::Defaults => board_info!("No config at {:?}; using defaults", config_path),
    }

    let widget = config.widget_config()?;
    let runner = EffectRunner::new(config.field_names(), FetchSettings::default());
    let mut out = io::stdout().lock();

    let mut state = step(AppState::new(widget), Msg::Started, &runner, &mut out)?;
    while state.phase() == LoadPhase::Loading {
        match runner.recv() {
            Some(msg) => state = step(state, msg, &runner, &mut out)?,
            None => {
                board_warn!("Engine stopped before the feed arrived");
                return Ok(());
            }
        }
    }
    if state.phase() != LoadPhase::Ready {
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(Command::Send(msg)) => state = step(state, msg, &runner, &mut out)?,
            Some(Command::Quit) => break,
            None => board_warn!("Ignoring unrecognised command: {}", line.trim()),
        }
    }

    Ok(())
}

/// Runs one message through `update`, executes its effects and re-renders if needed.
fn step(
    state: AppState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut impl Write,
) -> anyhow::Result<AppState> {
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);
    if state.consume_dirty() {
        let page = ui::render::render_page(&state.view())?;
        writeln!(out, "{page}")?;
        out.flush()?;
    }
    Ok(state)
}
