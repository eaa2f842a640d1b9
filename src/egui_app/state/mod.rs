use tracing::{debug, info, warn};

use crate::egui_app::catalog::CatalogCache;
use crate::egui_app::render::{reconcile, RenderPlan};
use crate::egui_app::router::{NavOutcome, ViewRouter};
use crate::egui_app::session::{check_credentials, check_new_user, SessionStore};
use crate::egui_app::storage::{SharedStore, THEME_KEY};
use crate::egui_app::types::{AppView, AuthTab, Theme};
use crate::shared::{ClientError, DemoUser, RecommendationsResponse, UserId, UserProfile};

pub mod actions;
pub mod slot;

pub use actions::{Action, Command, FetchRequest, FetchTicket};
pub use slot::{AuthModal, RecommendationSlot, RecommendationSource, SlotStatus};

/// Notice shown on the login tab after a successful registration
pub const REGISTERED_NOTICE: &str = "Registration successful! Please log in.";

/// Central application state. Mutated only through [`AppState::dispatch`].
pub struct AppState {
    pub session: SessionStore,
    pub catalog: CatalogCache,
    pub router: ViewRouter,
    pub theme: Theme,
    pub demo_users: Vec<DemoUser>,
    pub selected_demo: Option<UserId>,
    pub recommendations: Option<RecommendationSlot>,
    pub auth_modal: AuthModal,
    /// A `/api/me` check is outstanding
    pub validating: bool,
    generation: u64,
    validation_seq: u64,
    store: SharedStore,
}

impl AppState {
    /// Fresh state; the theme is applied from storage immediately
    pub fn new(store: SharedStore) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        debug!(theme = theme.as_str(), "AppState initialized");

        Self {
            session: SessionStore::new(store.clone()),
            catalog: CatalogCache::new(),
            router: ViewRouter::new(),
            theme,
            demo_users: Vec::new(),
            selected_demo: None,
            recommendations: None,
            auth_modal: AuthModal::default(),
            validating: false,
            generation: 0,
            validation_seq: 0,
            store,
        }
    }

    pub fn view(&self) -> AppView {
        self.router.current()
    }

    /// Current fetch generation; bumps on every view activation and fetch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Render description for the current state
    pub fn render_plan(&self) -> RenderPlan {
        reconcile(self).plan
    }

    /// Apply one action and return the work it triggers
    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        let mut commands = Vec::new();

        match action {
            Action::Start => {
                commands.push(Command::LoadStaticData);
                if let Some(token) = self.session.restore().map(str::to_owned) {
                    commands.push(self.begin_validation(token));
                }
            }
            Action::StaticDataLoaded { demo_users, products } => {
                self.catalog.populate(products);
                match demo_users {
                    Ok(users) => self.demo_users = users,
                    Err(e) => warn!(error = %e, "demo identities unavailable"),
                }
            }
            Action::SessionChecked { seq, result } => self.finish_validation(seq, result),
            Action::Navigate(target) => self.navigate(target),
            Action::SelectDemoUser(selection) => {
                if self.is_authenticated() {
                    debug!("demo selection ignored while signed in");
                } else {
                    self.selected_demo = selection;
                    self.invalidate_recommendations();
                }
            }
            Action::AuthButton => {
                if self.is_authenticated() {
                    self.logout();
                } else {
                    self.auth_modal.show(AuthTab::Login);
                }
            }
            Action::OpenAuth => self.auth_modal.show(AuthTab::Login),
            Action::CloseAuth => self.auth_modal.close(),
            Action::SwitchAuthTab(tab) => self.auth_modal.switch_tab(tab),
            Action::SubmitLogin(credentials) => {
                if self.submit(check_credentials(&credentials)) {
                    commands.push(Command::Login(credentials));
                }
            }
            Action::LoginFinished(result) => {
                self.auth_modal.busy = false;
                match result {
                    Ok(token) => {
                        info!("login succeeded");
                        self.session.accept_token(token.clone());
                        self.auth_modal.close();
                        self.invalidate_recommendations();
                        commands.push(self.begin_validation(token));
                    }
                    Err(e) => {
                        info!(error = %e, "login failed");
                        self.auth_modal.error = Some(e.user_message());
                    }
                }
            }
            Action::SubmitRegister(user) => {
                if self.submit(check_new_user(&user)) {
                    commands.push(Command::Register(user));
                }
            }
            Action::RegisterFinished(result) => {
                self.auth_modal.busy = false;
                match result {
                    Ok(()) => {
                        info!("registration succeeded");
                        self.auth_modal.switch_tab(AuthTab::Login);
                        self.auth_modal.notice = Some(REGISTERED_NOTICE.to_string());
                    }
                    Err(e) => {
                        info!(error = %e, "registration failed");
                        self.auth_modal.error = Some(e.user_message());
                    }
                }
            }
            Action::Logout => self.logout(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
                    warn!(error = %e, "failed to persist theme");
                }
            }
            Action::RecommendationsFetched { ticket, result } => {
                self.apply_recommendations(ticket, result)
            }
        }

        commands.extend(self.update_ui());
        commands
    }

    /// Issue the fetch the active view needs, if any
    fn update_ui(&mut self) -> Option<Command> {
        let need = reconcile(self).fetch?;

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            source: need.source,
        };
        let token = match need.source {
            RecommendationSource::Personal => self.session.token().map(str::to_owned),
            RecommendationSource::Demo(_) => None,
        };
        self.recommendations = Some(RecommendationSlot {
            source: need.source,
            status: SlotStatus::Loading {
                generation: self.generation,
            },
        });
        debug!(generation = self.generation, source = ?need.source, "fetching recommendations");
        Some(Command::FetchRecommendations(FetchRequest { ticket, token }))
    }

    fn navigate(&mut self, target: AppView) {
        match self.router.navigate(target, self.is_authenticated()) {
            NavOutcome::AuthRequired => self.auth_modal.show(AuthTab::Login),
            NavOutcome::Activated(view) => {
                self.generation += 1;
                if view == AppView::Recommendations {
                    self.invalidate_recommendations();
                }
            }
        }
    }

    /// Gate a form submission on local validation; `true` means send it
    fn submit(&mut self, check: Result<(), ClientError>) -> bool {
        if self.auth_modal.busy {
            return false;
        }
        match check {
            Ok(()) => {
                self.auth_modal.busy = true;
                self.auth_modal.error = None;
                self.auth_modal.notice = None;
                true
            }
            Err(e) => {
                self.auth_modal.error = Some(e.user_message());
                false
            }
        }
    }

    fn begin_validation(&mut self, token: String) -> Command {
        self.validation_seq += 1;
        self.validating = true;
        Command::ValidateSession {
            token,
            seq: self.validation_seq,
        }
    }

    fn finish_validation(&mut self, seq: u64, result: Result<UserProfile, ClientError>) {
        if !self.validating || seq != self.validation_seq {
            debug!(seq, current = self.validation_seq, "dropping stale session check");
            return;
        }
        self.validating = false;
        self.session.apply_validation(result);
        self.router.enforce(self.is_authenticated());
        self.invalidate_recommendations();
    }

    fn logout(&mut self) {
        self.session.logout();
        self.router.reset();
        self.auth_modal.close();
        self.validating = false;
        self.validation_seq += 1;
        self.invalidate_recommendations();
    }

    fn invalidate_recommendations(&mut self) {
        self.recommendations = None;
        self.generation += 1;
    }

    fn apply_recommendations(
        &mut self,
        ticket: FetchTicket,
        result: Result<RecommendationsResponse, ClientError>,
    ) {
        let expected = SlotStatus::Loading {
            generation: ticket.generation,
        };
        let current = matches!(
            &self.recommendations,
            Some(slot) if slot.source == ticket.source && slot.status == expected
        );
        if !current {
            debug!(generation = ticket.generation, "dropping stale recommendations");
            return;
        }
        if self.view() != AppView::Recommendations {
            debug!(generation = ticket.generation, "view changed; discarding recommendations");
            self.recommendations = None;
            return;
        }
        if let Err(e) = &result {
            warn!(error = %e, "recommendations fetch failed");
        }
        self.recommendations = Some(RecommendationSlot {
            source: ticket.source,
            status: SlotStatus::from_result(ticket.source, result),
        });
    }
}
