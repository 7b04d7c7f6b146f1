use crate::{Axes, LinkTemplate, MatchPolicy, QuickFilter, ShortcutGuard};

/// Per-deployment settings of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub feed_url: String,
    pub links: LinkTemplate,
    pub policy: MatchPolicy,
    /// Filter controls that exist on the page.
    pub controls: Axes,
    pub shortcuts: Vec<QuickFilter>,
    pub shortcut_guard: ShortcutGuard,
}

impl WidgetConfig {
    pub fn new(feed_url: impl Into<String>, links: LinkTemplate) -> Self {
        Self {
            feed_url: feed_url.into(),
            links,
            policy: MatchPolicy::default(),
            controls: Axes::all(),
            shortcuts: Vec::new(),
            shortcut_guard: ShortcutGuard::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_controls(mut self, controls: Axes) -> Self {
        self.controls = controls;
        self
    }

    /// Controls the policy actually consults. A control for an axis the policy
    /// ignores is not rendered and its changes are dropped.
    pub fn active_controls(&self) -> Axes {
        self.controls.intersect(self.policy.axes)
    }

    pub fn with_shortcuts(mut self, shortcuts: Vec<QuickFilter>, guard: ShortcutGuard) -> Self {
        self.shortcuts = shortcuts;
        self.shortcut_guard = guard;
        self
    }
}
