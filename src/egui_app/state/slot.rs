//! Data slots held by the application state between fetches.

use crate::egui_app::types::AuthTab;
use crate::shared::{ClientError, Product, RecommendationsResponse, UserId};

/// Shown when the personal list comes back empty without a message
pub const NO_PERSONAL_RECOMMENDATIONS: &str = "No new recommendations right now. Check back later!";

/// Shown when a demo answer has neither recommendations nor an error
pub const NO_DEMO_RECOMMENDATIONS: &str = "No recommendations.";

/// Whose recommendations a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationSource {
    /// The signed-in user, via the bearer-authenticated endpoint
    Personal,
    /// A demo identity picked in the selector
    Demo(UserId),
}

/// Progress of the recommendations fetch for one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    /// A fetch with this generation is in flight
    Loading { generation: u64 },
    Loaded(Vec<Product>),
    /// Empty or error answer with a user-readable explanation
    Message(String),
    /// Transport or decode failure
    Failed,
}

impl SlotStatus {
    /// Map a finished fetch onto what the panel should show
    pub fn from_result(
        source: RecommendationSource,
        result: Result<RecommendationsResponse, ClientError>,
    ) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(_) => return SlotStatus::Failed,
        };
        match response.recommendations {
            Some(products) if !products.is_empty() => SlotStatus::Loaded(products),
            _ => {
                let fallback = match source {
                    RecommendationSource::Personal => NO_PERSONAL_RECOMMENDATIONS,
                    RecommendationSource::Demo(_) => NO_DEMO_RECOMMENDATIONS,
                };
                let text = response
                    .message
                    .or(response.error)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string());
                SlotStatus::Message(text)
            }
        }
    }
}

/// Recommendations backing the recommendations view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationSlot {
    pub source: RecommendationSource,
    pub status: SlotStatus,
}

/// State of the login/register modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthModal {
    pub open: bool,
    pub tab: AuthTab,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub busy: bool,
}

impl AuthModal {
    pub fn show(&mut self, tab: AuthTab) {
        self.open = true;
        self.switch_tab(tab);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
        self.notice = None;
        self.busy = false;
    }

    /// Changing tab clears any inline error
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.error = None;
        self.notice = None;
    }
}
