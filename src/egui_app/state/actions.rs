//! Typed inputs and outputs of the controller.
//!
//! Every user interaction and every finished request becomes an [`Action`].
//! Dispatching an action may yield [`Command`]s, which the driver executes
//! asynchronously; their results come back as actions.

use crate::egui_app::state::slot::RecommendationSource;
use crate::egui_app::types::{AppView, AuthTab};
use crate::shared::{
    ClientError, Credentials, DemoUser, NewUser, Product, RecommendationsResponse, UserId,
    UserProfile,
};

/// Identifies one recommendations fetch. Completions whose ticket no longer
/// matches the state are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub source: RecommendationSource,
}

/// A recommendations fetch to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    /// Bearer token for the personal endpoint
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Restore persisted state and load startup data
    Start,
    StaticDataLoaded {
        demo_users: Result<Vec<DemoUser>, ClientError>,
        products: Result<Vec<Product>, ClientError>,
    },
    SessionChecked {
        seq: u64,
        result: Result<UserProfile, ClientError>,
    },
    Navigate(AppView),
    SelectDemoUser(Option<UserId>),
    /// The header button: login prompt when anonymous, logout otherwise
    AuthButton,
    OpenAuth,
    CloseAuth,
    SwitchAuthTab(AuthTab),
    SubmitLogin(Credentials),
    LoginFinished(Result<String, ClientError>),
    SubmitRegister(NewUser),
    RegisterFinished(Result<(), ClientError>),
    Logout,
    ToggleTheme,
    RecommendationsFetched {
        ticket: FetchTicket,
        result: Result<RecommendationsResponse, ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch demo identities and the catalog
    LoadStaticData,
    ValidateSession { token: String, seq: u64 },
    Login(Credentials),
    Register(NewUser),
    FetchRecommendations(FetchRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::LoadStaticData => "load_static_data",
            Command::ValidateSession { .. } => "validate_session",
            Command::Login(_) => "login",
            Command::Register(_) => "register",
            Command::FetchRecommendations(_) => "fetch_recommendations",
        }
    }
}
