//! The session state container.

use portal_store::IdentityStore;
use portal_types::{Identity, Role};
use portal_utils::{Clock, RandomSource};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::credentials;
use crate::error::SessionError;
use crate::route::{Access, Route};

/// Simulated round-trip for a sign-in.
pub const LOGIN_LATENCY: Duration = Duration::from_secs(1);
/// Simulated round-trip for a registration.
pub const REGISTER_LATENCY: Duration = Duration::from_secs(1);
/// Length of the identifier synthesized for a new registration.
pub const REGISTERED_ID_LEN: usize = 7;

/// A point-in-time copy of the session fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<Identity>,
    pub is_authenticated: bool,
    pub initialized: bool,
}

/// Signed-in identity plus authentication flags.
///
/// Every field lives behind one lock that is never held across an await, so
/// overlapping actions interleave with last-write-wins semantics.
pub struct SessionState<S, C, R> {
    store: S,
    clock: C,
    random: R,
    inner: Mutex<SessionSnapshot>,
}

impl<S, C, R> SessionState<S, C, R>
where
    S: IdentityStore,
    C: Clock,
    R: RandomSource,
{
    /// A fresh, uninitialized session. Call [`SessionState::check_auth`] once
    /// at start-up to pick up a persisted identity.
    pub fn new(store: S, clock: C, random: R) -> Self {
        Self {
            store,
            clock,
            random,
            inner: Mutex::new(SessionSnapshot::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.lock().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore the persisted identity, if any.
    ///
    /// Never fails: unreadable storage and malformed records both leave the
    /// session signed out. Always marks the session initialized, and calling
    /// it again re-reads the same record to the same result.
    pub fn check_auth(&self) {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "could not read persisted identity");
                None
            }
        };

        let mut inner = self.lock();
        if let Some(raw) = stored {
            match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    debug!(user = %identity.username, "restored persisted identity");
                    inner.user = Some(identity);
                    inner.is_authenticated = true;
                }
                Err(e) => {
                    debug!(error = %e, "discarding malformed identity record");
                    inner.user = None;
                    inner.is_authenticated = false;
                }
            }
        }
        inner.initialized = true;
    }

    /// Sign in against the demo accounts.
    ///
    /// On mismatch the session is left untouched.
    pub async fn try_login(&self, username: &str, password: &str) -> Result<Identity, SessionError> {
        self.clock.sleep(LOGIN_LATENCY).await;

        let identity =
            credentials::authenticate(username, password).ok_or(SessionError::InvalidCredentials)?;
        self.sign_in(identity.clone())?;
        info!(user = %identity.username, role = ?identity.role, "signed in");
        Ok(identity)
    }

    /// [`SessionState::try_login`], reporting only success.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        match self.try_login(username, password).await {
            Ok(_) => true,
            Err(SessionError::InvalidCredentials) => {
                warn!(user = %username, "rejected credentials");
                false
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                false
            }
        }
    }

    /// Register and sign in a new identity.
    ///
    /// No uniqueness or format checks happen here; callers validate the form
    /// first (see [`RegistrationForm`](crate::RegistrationForm)). The password
    /// and phone number are accepted but not kept.
    pub async fn try_register(
        &self,
        email: &str,
        username: &str,
        _password: &str,
        _phone_number: &str,
        role: Option<Role>,
    ) -> Result<Identity, SessionError> {
        self.clock.sleep(REGISTER_LATENCY).await;

        let identity = Identity {
            id: self.random.base36(REGISTERED_ID_LEN),
            username: username.to_string(),
            email: email.to_string(),
            role,
        };
        self.sign_in(identity.clone())?;
        info!(user = %identity.username, id = %identity.id, "registered");
        Ok(identity)
    }

    /// [`SessionState::try_register`], reporting only success.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        phone_number: &str,
        role: Option<Role>,
    ) -> bool {
        match self
            .try_register(email, username, password, phone_number, role)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "registration failed");
                false
            }
        }
    }

    /// Forget the identity, in storage and then in memory.
    ///
    /// If the persisted record cannot be cleared the session stays signed in,
    /// since the next [`SessionState::check_auth`] would restore it anyway.
    pub fn try_logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.forget();
        Ok(())
    }

    /// [`SessionState::try_logout`], always signing out in memory.
    pub fn logout(&self) {
        if let Err(e) = self.try_logout() {
            warn!(error = %e, "could not clear persisted identity");
            self.forget();
        }
    }

    fn forget(&self) {
        let mut inner = self.lock();
        if let Some(user) = inner.user.take() {
            info!(user = %user.username, "signed out");
        }
        inner.is_authenticated = false;
    }

    /// Decide whether the current identity may open `route`.
    pub fn resolve(&self, route: Route) -> Access {
        let inner = self.lock();
        route.access_for(inner.is_authenticated, inner.user.as_ref().and_then(|u| u.role))
    }

    fn sign_in(&self, identity: Identity) -> Result<(), SessionError> {
        let record = serde_json::to_string(&identity)?;
        self.store.save(&record)?;
        let mut inner = self.lock();
        inner.user = Some(identity);
        inner.is_authenticated = true;
        Ok(())
    }
}
