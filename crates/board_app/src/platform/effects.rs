use std::sync::Arc;

use board_core::{Effect, Msg};
use board_engine::{
    EngineEvent, EngineHandle, FeedClient, FetchSettings, FieldNames, PositionExtractor,
};
use board_logging::{board_error, board_info, board_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(fields: FieldNames, settings: FetchSettings) -> Self {
        let engine = EngineHandle::new(
            FeedClient::with_settings(settings),
            Arc::new(PositionExtractor::new(fields)),
        );
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchFeed { url } => {
                    board_info!("Fetching feed url={}", url);
                    self.engine.load_feed(url);
                }
                Effect::ListingReady {
                    sections,
                    jobs,
                    dropped,
                } => {
                    board_info!("Listing ready: {} categories, {} jobs", sections, jobs);
                    if dropped > 0 {
                        board_warn!("Dropped {} incomplete positions from feed", dropped);
                    }
                }
                Effect::ReportFailure { message } => {
                    board_error!("Error fetching or processing feed: {}", message);
                }
            }
        }
    }

    /// Blocks until the engine reports back. `None` once the engine is gone.
    pub fn recv(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FeedLoaded { url, extraction } => {
            board_info!(
                "Feed loaded from {}: {} positions kept",
                url,
                extraction.categories.job_count()
            );
            Msg::FeedLoaded { extraction }
        }
        EngineEvent::FeedFailed { url, error } => Msg::FeedFailed {
            message: format!("{url}: {error}"),
        },
    }
}
