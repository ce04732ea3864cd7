//! Hosting surface abstraction

use serde::{Deserialize, Serialize};

/// Kind of window the page is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiKind {
    /// Transient toolbar popup
    Popup,
    /// Full browser tab
    #[default]
    Tab,
    /// Notification window
    Notification,
}

/// Hosting surface Trait
pub trait UiSurface: Send + Sync {
    /// Kind of the current surface
    fn kind(&self) -> UiKind;

    /// Whether the page is hosted in a transient popup
    fn is_popup(&self) -> bool {
        self.kind() == UiKind::Popup
    }
}

/// Surface with a fixed kind
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticUiSurface(pub UiKind);

impl UiSurface for StaticUiSurface {
    fn kind(&self) -> UiKind {
        self.0
    }
}
