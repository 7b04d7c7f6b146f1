//! Job board engine: feed retrieval, parsing, extraction and markup output.
mod client;
mod decode;
mod document;
mod engine;
mod extract;
mod fetch;
mod markup;
mod types;

pub use client::FeedClient;
pub use decode::{decode_feed, DecodeError, DecodedFeed};
pub use document::{FeedDocument, XmlElement, XmlNode};
pub use engine::EngineHandle;
pub use extract::{CategoryExtractor, FieldNames, PositionExtractor};
pub use fetch::{FetchSettings, FetchedBody, Fetcher, ReqwestFetcher};
pub use markup::{
    render_filter_control, render_html, render_shortcuts, MarkupError, NO_RESULTS_TEXT,
};
pub use types::{EngineEvent, FailureKind, FeedError, FetchError, ParseError};
