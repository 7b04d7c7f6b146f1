use crate::view_model::{FilterControlView, LoadPhase, ShortcutView};
use crate::{
    render_listing, AppViewModel, Axis, DisplayDocument, Extraction, FilterEngine,
    FilterOptionSet, FilterSelection, SectionId, VisibilityResult, WidgetConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Loaded {
    listing: DisplayDocument,
    options: FilterOptionSet,
    visibility: Option<VisibilityResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Ready(Box<Loaded>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: WidgetConfig,
    engine: FilterEngine,
    phase: Phase,
    selection: FilterSelection,
    dirty: bool,
}

impl AppState {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            engine: FilterEngine::new(config.policy),
            config,
            phase: Phase::Idle,
            selection: FilterSelection::default(),
            dirty: false,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn listing(&self) -> Option<&DisplayDocument> {
        match &self.phase {
            Phase::Ready(loaded) => Some(&loaded.listing),
            _ => None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        match self.phase {
            Phase::Idle => LoadPhase::Idle,
            Phase::Loading => LoadPhase::Loading,
            Phase::Ready(_) => LoadPhase::Ready,
            Phase::Failed(_) => LoadPhase::Failed,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let mut view = AppViewModel {
            phase: self.phase(),
            dirty: self.dirty,
            ..AppViewModel::default()
        };

        match &self.phase {
            Phase::Ready(loaded) => {
                view.controls = self
                    .config
                    .active_controls()
                    .iter()
                    .map(|axis| FilterControlView {
                        axis,
                        options: loaded.options.for_axis(axis).to_vec(),
                        selected: self.selection.get(axis).unwrap_or_default().to_string(),
                    })
                    .collect();
                if self.shortcuts_active() {
                    view.shortcuts = self
                        .config
                        .shortcuts
                        .iter()
                        .map(|shortcut| ShortcutView {
                            name: shortcut.name.clone(),
                            location: shortcut.location.clone(),
                            enabled: shortcut.is_enabled(
                                self.config.shortcut_guard,
                                &loaded.listing,
                                &self.config.policy,
                            ),
                        })
                        .collect();
                }
                view.listing = Some(loaded.listing.clone());
                view.visibility = loaded.visibility.clone();
            }
            Phase::Failed(message) => view.failure = Some(message.clone()),
            Phase::Idle | Phase::Loading => {}
        }

        view
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) -> Option<String> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Loading;
        self.mark_dirty();
        Some(self.config.feed_url.clone())
    }

    pub(crate) fn install(&mut self, extraction: Extraction) -> Option<(usize, usize)> {
        if self.phase != Phase::Loading {
            return None;
        }
        let options = FilterOptionSet::build(&extraction.categories)
            .restricted_to(self.config.active_controls());
        let listing = render_listing(&extraction.categories, &self.config.links);
        let counts = (listing.sections().len(), listing.job_count());
        self.phase = Phase::Ready(Box::new(Loaded {
            listing,
            options,
            visibility: None,
        }));
        self.mark_dirty();
        Some(counts)
    }

    pub(crate) fn fail(&mut self, message: &str) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Failed(message.to_string());
        self.mark_dirty();
        true
    }

    pub(crate) fn change_filter(&mut self, axis: Axis, value: &str) {
        let active = self.config.active_controls();
        if !active.contains(axis) || !matches!(self.phase, Phase::Ready(_)) {
            return;
        }
        self.selection.set(axis, value);
        self.refilter();
    }

    pub(crate) fn toggle_section(&mut self, section: SectionId) {
        if let Phase::Ready(loaded) = &mut self.phase {
            if loaded.listing.toggle_section(section) {
                self.dirty = true;
            }
        }
    }

    pub(crate) fn click_shortcut(&mut self, name: &str) {
        if !self.shortcuts_active() {
            return;
        }
        let Phase::Ready(loaded) = &self.phase else {
            return;
        };
        let Some(shortcut) = self.config.shortcuts.iter().find(|s| s.name == name) else {
            return;
        };
        if !shortcut.is_enabled(self.config.shortcut_guard, &loaded.listing, &self.config.policy)
        {
            return;
        }
        let location = shortcut.location.clone();
        self.selection.set(Axis::Location, &location);
        self.refilter();
    }

    fn shortcuts_active(&self) -> bool {
        self.config.active_controls().contains(Axis::Location)
    }

    fn refilter(&mut self) {
        if let Phase::Ready(loaded) = &mut self.phase {
            let visibility = self.engine.apply(&self.selection, &mut loaded.listing);
            loaded.visibility = Some(visibility);
            self.dirty = true;
        }
    }
}
