use crate::{Axis, DisplayDocument, VisibilityResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControlView {
    pub axis: Axis,
    pub options: Vec<String>,
    /// Empty when the control has no selection.
    pub selected: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutView {
    pub name: String,
    pub location: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: LoadPhase,
    pub controls: Vec<FilterControlView>,
    pub shortcuts: Vec<ShortcutView>,
    pub listing: Option<DisplayDocument>,
    pub visibility: Option<VisibilityResult>,
    pub failure: Option<String>,
    pub dirty: bool,
}
