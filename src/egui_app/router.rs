//! View Router
//!
//! Tracks the single active view. Navigation is absolute (no history stack)
//! and protected views are refused while nobody is signed in.

use tracing::debug;

use crate::egui_app::types::AppView;

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The view changed (or was re-activated)
    Activated(AppView),
    /// The target needs a signed-in user; the view is unchanged
    AuthRequired,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: AppView,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> AppView {
        self.current
    }

    pub fn navigate(&mut self, target: AppView, authenticated: bool) -> NavOutcome {
        if target.is_protected() && !authenticated {
            debug!(?target, "navigation refused: authentication required");
            return NavOutcome::AuthRequired;
        }
        self.current = target;
        debug!(?target, "view activated");
        NavOutcome::Activated(target)
    }

    /// Return to the default view
    pub fn reset(&mut self) {
        self.current = AppView::default();
    }

    /// Fall back to the default view if the active one is no longer reachable
    pub fn enforce(&mut self, authenticated: bool) -> bool {
        if self.current.is_protected() && !authenticated {
            self.reset();
            return true;
        }
        false
    }
}
