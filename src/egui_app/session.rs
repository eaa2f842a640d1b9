/**
 * Session Store
 *
 * Holds the bearer token and the identity it resolves to. The token is
 * persisted so a restart can restore it; the identity is only ever set from
 * a successful `/api/me` call and is cleared together with the token.
 */
use tracing::{debug, info, warn};

use crate::egui_app::storage::{SharedStore, TOKEN_KEY};
use crate::shared::{ClientError, Credentials, NewUser, UserProfile};

/// Snapshot of the authentication state.
///
/// `user` is `Some` only while `token` is `Some` and was validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Owner of the session and its persisted token
pub struct SessionStore {
    session: Session,
    store: SharedStore,
}

impl SessionStore {
    pub fn new(store: SharedStore) -> Self {
        Self {
            session: Session::anonymous(),
            store,
        }
    }

    /// Read the persisted token without validating it
    pub fn restore(&mut self) -> Option<&str> {
        self.session.token = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        self.session.user = None;
        if self.session.token.is_some() {
            debug!("restored persisted token");
        }
        self.session.token.as_deref()
    }

    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Store and persist a freshly issued token. The identity must be
    /// re-validated before it is trusted.
    pub fn accept_token(&mut self, token: String) {
        if let Err(e) = self.store.set(TOKEN_KEY, &token) {
            warn!(error = %e, "failed to persist token");
        }
        self.session.token = Some(token);
        self.session.user = None;
    }

    /// Record the identity returned by `/api/me`. Ignored without a token.
    pub fn accept_profile(&mut self, profile: UserProfile) -> bool {
        if self.session.token.is_none() {
            warn!("discarding profile for a session without token");
            return false;
        }
        info!(user_id = profile.id, "session validated");
        self.session.user = Some(profile);
        true
    }

    /// Drop token and identity and purge the persisted token
    pub fn clear(&mut self) {
        self.session = Session::anonymous();
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            warn!(error = %e, "failed to purge persisted token");
        }
    }

    pub fn logout(&mut self) {
        info!("logging out");
        self.clear();
    }

    /// Apply the answer of `/api/me` for the current token.
    ///
    /// Any failure, including transport errors, clears the session and
    /// purges the persisted token. Returns the resulting snapshot.
    pub fn apply_validation(&mut self, result: Result<UserProfile, ClientError>) -> Session {
        match result {
            Ok(profile) => {
                self.accept_profile(profile);
            }
            Err(e) if e.is_transport() => {
                warn!(error = %e, "session check could not reach the backend; continuing anonymously");
                self.clear();
            }
            Err(e) => {
                info!(error = %e, "stored session is no longer valid");
                self.clear();
            }
        }
        self.snapshot()
    }
}

/// Local checks run before a login request is sent
pub fn check_credentials(credentials: &Credentials) -> Result<(), ClientError> {
    if credentials.username.trim().is_empty() {
        return Err(ClientError::validation("email", "Email is required"));
    }
    if credentials.password.is_empty() {
        return Err(ClientError::validation("password", "Password is required"));
    }
    Ok(())
}

/// Local checks run before a registration request is sent
pub fn check_new_user(user: &NewUser) -> Result<(), ClientError> {
    if user.name.trim().is_empty() {
        return Err(ClientError::validation("name", "Name is required"));
    }
    if user.email.trim().is_empty() {
        return Err(ClientError::validation("email", "Email is required"));
    }
    if user.password.is_empty() {
        return Err(ClientError::validation("password", "Password is required"));
    }
    Ok(())
}
