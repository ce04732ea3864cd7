//! Popup redirect guard

use crate::traits::UiSurface;
use crate::types::Location;

/// What the page should do on a render pass
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render,
    /// Render nothing and replace the route
    Redirect(Location),
}

/// Sends the import page away from transient popup windows
#[derive(Debug, Clone)]
pub struct EntryGuard {
    dashboard_path: String,
}

impl EntryGuard {
    #[must_use]
    pub fn new(dashboard_path: impl Into<String>) -> Self {
        Self {
            dashboard_path: dashboard_path.into(),
        }
    }

    #[must_use]
    pub fn evaluate(&self, surface: &dyn UiSurface) -> GuardDecision {
        if surface.is_popup() {
            GuardDecision::Redirect(Location::new(self.dashboard_path.clone()))
        } else {
            GuardDecision::Render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{StaticUiSurface, UiKind};

    #[test]
    fn popup_redirects_to_dashboard() {
        let guard = EntryGuard::new("/dashboard");
        assert_eq!(
            guard.evaluate(&StaticUiSurface(UiKind::Popup)),
            GuardDecision::Redirect(Location::new("/dashboard"))
        );
    }

    #[test]
    fn tab_and_notification_render() {
        let guard = EntryGuard::new("/dashboard");
        assert_eq!(
            guard.evaluate(&StaticUiSurface(UiKind::Tab)),
            GuardDecision::Render
        );
        assert_eq!(
            guard.evaluate(&StaticUiSurface(UiKind::Notification)),
            GuardDecision::Render
        );
    }
}
