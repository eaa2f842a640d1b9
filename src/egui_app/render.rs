//! Reconciliation
//!
//! [`reconcile`] turns the application state into a [`RenderPlan`], a plain
//! description of what every part of the window shows, plus the data fetch
//! the active view still needs. It reads state only, so calling it again
//! without a state change yields an equal plan and the same fetch need.
//! The controller acts on the fetch need; the front-end paints the plan.

use crate::egui_app::catalog::CatalogCache;
use crate::egui_app::state::{AppState, AuthModal, RecommendationSource, SlotStatus};
use crate::egui_app::types::{AppView, Theme};
use crate::shared::{DemoUser, Product, ProductId, UserId, UserProfile};

pub const LOADING_PERSONAL: &str = "Loading your picks...";
pub const LOADING_DEMO: &str = "Loading demo picks...";
pub const LOAD_FAILED: &str = "Could not load recommendations.";
pub const NO_PURCHASES: &str = "You have no past purchases.";
pub const PROFILE_PLACEHOLDER: &str = "Please log in to view your profile.";

const ANONYMOUS_TITLE: &str = "Your Personal Shopping Agent";
const ANONYMOUS_SUBTITLE: &str = "Select a demo profile or login.";
const SIGNED_IN_SUBTITLE: &str = "Here are your personalized picks.";

/// Output of one reconciliation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub plan: RenderPlan,
    pub fetch: Option<FetchNeed>,
}

/// Data the active view is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchNeed {
    pub source: RecommendationSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub theme: Theme,
    pub header: HeaderPlan,
    pub nav: Vec<NavEntry>,
    pub body: ViewBody,
    /// Present while the login/register modal is open
    pub auth_modal: Option<AuthModal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPlan {
    pub auth_button: &'static str,
    pub welcome_title: String,
    pub welcome_subtitle: &'static str,
    /// Present only while anonymous
    pub demo_selector: Option<DemoSelectorPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoSelectorPlan {
    pub options: Vec<DemoUser>,
    pub selected: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub view: AppView,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Recommendations(Panel),
    PurchaseHistory { title: String, panel: Panel },
    UserDetails(ProfilePlan),
}

/// Content of a card grid area
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Blank,
    Notice(String),
    Cards(Vec<Card>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub product_id: ProductId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// "Purchased on: ..." line of history cards
    pub purchased_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfilePlan {
    Profile {
        initials: String,
        name: String,
        email: String,
    },
    Placeholder(&'static str),
}

pub fn reconcile(state: &AppState) -> Reconciliation {
    let user = state.session.user();
    let view = state.view();

    let header = match user {
        Some(user) => HeaderPlan {
            auth_button: "Logout",
            welcome_title: format!("Welcome, {}!", user.name),
            welcome_subtitle: SIGNED_IN_SUBTITLE,
            demo_selector: None,
        },
        None => HeaderPlan {
            auth_button: "Login",
            welcome_title: ANONYMOUS_TITLE.to_string(),
            welcome_subtitle: ANONYMOUS_SUBTITLE,
            demo_selector: Some(DemoSelectorPlan {
                options: state.demo_users.clone(),
                selected: state.selected_demo,
            }),
        },
    };

    let nav = AppView::ALL
        .iter()
        .filter(|v| **v != AppView::UserDetails || user.is_some())
        .map(|v| NavEntry {
            view: *v,
            active: *v == view,
        })
        .collect();

    let mut fetch = None;
    let body = match view {
        AppView::Recommendations => {
            let (panel, need) = recommendations_panel(state);
            fetch = need;
            ViewBody::Recommendations(panel)
        }
        AppView::PurchaseHistory => match user {
            Some(user) => ViewBody::PurchaseHistory {
                title: format!("{}'s Purchase History", user.name),
                panel: history_panel(user, &state.catalog),
            },
            None => ViewBody::PurchaseHistory {
                title: String::new(),
                panel: Panel::Blank,
            },
        },
        AppView::UserDetails => ViewBody::UserDetails(match user {
            Some(user) => ProfilePlan::Profile {
                initials: initials(&user.name),
                name: user.name.clone(),
                email: user.email.clone(),
            },
            None => ProfilePlan::Placeholder(PROFILE_PLACEHOLDER),
        }),
    };

    Reconciliation {
        plan: RenderPlan {
            theme: state.theme,
            header,
            nav,
            body,
            auth_modal: state.auth_modal.open.then(|| state.auth_modal.clone()),
        },
        fetch,
    }
}

/// Whose recommendations the panel should show right now
pub fn desired_source(state: &AppState) -> Option<RecommendationSource> {
    if state.validating {
        return None;
    }
    if state.session.is_authenticated() {
        Some(RecommendationSource::Personal)
    } else {
        state.selected_demo.map(RecommendationSource::Demo)
    }
}

fn recommendations_panel(state: &AppState) -> (Panel, Option<FetchNeed>) {
    let Some(source) = desired_source(state) else {
        return (Panel::Blank, None);
    };
    let loading = match source {
        RecommendationSource::Personal => LOADING_PERSONAL,
        RecommendationSource::Demo(_) => LOADING_DEMO,
    };

    match &state.recommendations {
        Some(slot) if slot.source == source => {
            let panel = match &slot.status {
                SlotStatus::Loading { .. } => Panel::Notice(loading.to_string()),
                SlotStatus::Loaded(products) => Panel::Cards(products.iter().map(product_card).collect()),
                SlotStatus::Message(text) => Panel::Notice(text.clone()),
                SlotStatus::Failed => Panel::Notice(LOAD_FAILED.to_string()),
            };
            (panel, None)
        }
        _ => (Panel::Notice(loading.to_string()), Some(FetchNeed { source })),
    }
}

fn product_card(product: &Product) -> Card {
    Card {
        product_id: product.id,
        title: product.name.clone(),
        description: Some(product.description.clone()).filter(|d| !d.is_empty()),
        image_url: Some(product.image_url.clone()).filter(|u| !u.is_empty()),
        purchased_on: None,
    }
}

fn history_panel(user: &UserProfile, catalog: &CatalogCache) -> Panel {
    if user.purchase_history.is_empty() {
        return Panel::Notice(NO_PURCHASES.to_string());
    }
    Panel::Cards(history_cards(user, catalog))
}

/// Purchases joined against the catalog, most recent first.
///
/// Products missing from the catalog degrade to a card naming the raw id.
pub fn history_cards(user: &UserProfile, catalog: &CatalogCache) -> Vec<Card> {
    user.purchase_history
        .iter()
        .rev()
        .map(|record| {
            let mut card = match catalog.get(record.product_id) {
                Some(product) => product_card(product),
                None => Card {
                    product_id: record.product_id,
                    title: format!("Product #{}", record.product_id),
                    description: None,
                    image_url: None,
                    purchased_on: None,
                },
            };
            card.description = None;
            card.purchased_on = Some(format!("Purchased on: {}", record.purchase_date));
            card
        })
        .collect()
}

/// First letter of each space-separated word, at most two, uppercased
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .collect()
}
