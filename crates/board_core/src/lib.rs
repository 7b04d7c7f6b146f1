//! Job board core: listing model, filtering, and the pure widget state machine.
mod config;
mod effect;
mod filter;
mod listing;
mod model;
mod msg;
mod options;
mod policy;
mod selection;
mod shortcuts;
mod state;
mod update;
mod view_model;

pub use config::WidgetConfig;
pub use effect::Effect;
pub use filter::{FilterEngine, JobVisibility, SectionVisibility, VisibilityResult};
pub use listing::{
    count_label, render_listing, DisplayDocument, JobEntry, LinkTemplate, LinkTemplateError,
    Section, SectionId,
};
pub use model::{Category, CategoryMap, Extraction, JobRecord};
pub use msg::Msg;
pub use options::FilterOptionSet;
pub use policy::{CaseSensitivity, LocationMatch, MatchPolicy};
pub use selection::{Axes, Axis, FilterSelection};
pub use shortcuts::{QuickFilter, ShortcutGuard, ZERO_POSITIONS_TEXT};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, FilterControlView, LoadPhase, ShortcutView};
