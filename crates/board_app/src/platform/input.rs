//! Line commands standing in for page interactions.

use board_core::{Axis, Msg, SectionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Msg),
    Quit,
}

/// Parses `filter <axis> [value]`, `toggle <n>`, `shortcut <name>` or `quit`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "filter" => {
            let (axis, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Some(Command::Send(Msg::FilterChanged {
                axis: Axis::from_name(axis)?,
                value: value.trim().to_string(),
            }))
        }
        "toggle" => Some(Command::Send(Msg::SectionToggled {
            section: SectionId(rest.parse().ok()?),
        })),
        "shortcut" if !rest.is_empty() => Some(Command::Send(Msg::ShortcutClicked {
            name: rest.to_string(),
        })),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}
