use std::sync::{mpsc, Arc};
use std::thread;

use board_logging::board_error;

use crate::{CategoryExtractor, EngineEvent, FeedClient, FeedError, FetchError, FailureKind};

enum EngineCommand {
    LoadFeed { url: String },
}

/// Runs feed loads on a background thread that owns the async runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: FeedClient, extractor: Arc<dyn CategoryExtractor>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_error!("Failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let extractor = extractor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&client, extractor.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn load_feed(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadFeed { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    client: &FeedClient,
    extractor: &dyn CategoryExtractor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadFeed { url } => {
            let event = match client.load(&url).await {
                Ok(document) => EngineEvent::FeedLoaded {
                    extraction: extractor.extract(&document),
                    url,
                },
                Err(error) => EngineEvent::FeedFailed { url, error },
            };
            let _ = event_tx.send(event);
        }
    }
}

fn fail_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    message: &str,
) {
    while let Ok(EngineCommand::LoadFeed { url }) = cmd_rx.recv() {
        let error = FeedError::Network(FetchError::new(FailureKind::Network, message));
        let _ = event_tx.send(EngineEvent::FeedFailed { url, error });
    }
}
