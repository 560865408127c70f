//! Session ownership: bearer token, user identity, durable persistence.
//!
//! Durable storage is the source of truth; the in-memory copy is a cache
//! that can go stale when another same-origin tab writes the same keys.
//! Authentication checks therefore re-read storage on every call.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::User;

/// Durable storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Durable storage key holding the signed-in user as JSON.
pub const USER_KEY: &str = "user";

/// Key/value persistence for session state.
///
/// Browser builds back this with `localStorage`; tests use
/// [`MemoryStorage`].
pub trait StorageBackend {
    /// Read a value, `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str);

    /// Remove a value; a no-op when absent.
    fn remove(&self, key: &str);
}

/// In-memory [`StorageBackend`] for tests.
///
/// Clones share the same underlying map, which lets a test observe the
/// store's writes the way a second tab would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Expiry information decoded from a JWT access token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStatus {
    /// The `sub` claim, when present.
    pub subject: Option<String>,

    /// The `exp` claim as a timestamp, when present.
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenStatus {
    /// Whether the token's `exp` claim lies in the past.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}

#[derive(Deserialize)]
struct Claims {
    sub: Option<String>,
    exp: Option<i64>,
}

fn decode_claims(token: &str) -> Option<TokenStatus> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(TokenStatus {
        subject: claims.sub,
        expires_at: claims
            .exp
            .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0)),
    })
}

/// Owns the authentication token and user identity.
///
/// Invariant: a non-empty resolvable token means the user is considered
/// authenticated. All mutating operations write through to durable
/// storage before returning, so a reload immediately afterwards observes
/// the new state.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    token: RefCell<Option<String>>,
    user: RefCell<Option<User>>,
}

impl<S: StorageBackend> SessionStore<S> {
    /// Create a store, rehydrating token and user from durable storage.
    pub fn new(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let user = storage
            .get(USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok());
        tracing::debug!(authenticated = token.is_some(), "session rehydrated");
        Self {
            storage,
            token: RefCell::new(token),
            user: RefCell::new(user),
        }
    }

    /// Persist a freshly issued token and optional user identity.
    pub fn remember(&self, token: &str, user: Option<&User>) {
        self.storage.set(TOKEN_KEY, token);
        if let Some(user) = user
            && let Ok(json) = serde_json::to_string(user)
        {
            self.storage.set(USER_KEY, &json);
        }
        *self.token.borrow_mut() = Some(token.to_string());
        *self.user.borrow_mut() = user.cloned();
    }

    /// Forget the session. Idempotent; safe to call when already logged
    /// out.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
        tracing::debug!("session cleared");
    }

    /// Resolve a non-empty token, preferring durable storage over the
    /// in-memory cache.
    pub fn resolve_token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .or_else(|| {
                self.token
                    .borrow()
                    .clone()
                    .filter(|token| !token.is_empty())
            })
    }

    /// Whether a usable token is currently resolvable.
    pub fn is_authenticated(&self) -> bool {
        self.resolve_token().is_some()
    }

    /// Header set for API calls.
    ///
    /// Always contains `Content-Type`; contains `Authorization` iff a
    /// token is resolvable. Never fails.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = self.resolve_token() {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }

    /// The signed-in user, preferring durable storage over the cache.
    pub fn user(&self) -> Option<User> {
        self.storage
            .get(USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .or_else(|| self.user.borrow().clone())
    }

    /// Best-effort decode of the current token's JWT payload.
    ///
    /// Returns `None` when no token resolves or the token is not a JWT.
    pub fn token_status(&self) -> Option<TokenStatus> {
        self.resolve_token()
            .as_deref()
            .and_then(decode_claims)
    }
}
