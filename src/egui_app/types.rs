/**
 * Shared Types Module
 *
 * Defines the view identifiers, theme preference and auth-form tabs used by
 * the controller and the front-end.
 */

/// Current app view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppView {
    /// Personal or demo recommendations
    #[default]
    Recommendations,
    /// Catalog-joined purchase history, most recent first
    PurchaseHistory,
    /// Profile summary of the signed-in user
    UserDetails,
}

impl AppView {
    /// Every view, in navigation order
    pub const ALL: [AppView; 3] = [
        AppView::Recommendations,
        AppView::PurchaseHistory,
        AppView::UserDetails,
    ];

    /// Views that need a signed-in user
    pub fn is_protected(self) -> bool {
        matches!(self, AppView::PurchaseHistory | AppView::UserDetails)
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            AppView::Recommendations => "Recommendations",
            AppView::PurchaseHistory => "Purchase History",
            AppView::UserDetails => "User Details",
        }
    }
}

/// Light or dark colour scheme. Persisted independently of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted value; anything but `"dark"` is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Tab of the authentication modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}
