use std::rc::Rc;

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    ApiError, LoginRequest, LoginResponse, RegisterRequest, Resource, User, classify_response,
    credential_failure,
};
use shared::session::SessionStore;

use crate::config::ApiConfig;
use crate::storage::BrowserStorage;

/// Lightweight API client for the catalog backend.
///
/// Owns the session store and reads the current auth headers from
/// durable storage at send time, so a token written by another tab is
/// picked up without a reload.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    session: Rc<SessionStore<BrowserStorage>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.session, &other.session)
    }
}

impl ApiClient {
    /// Create a new API client, rehydrating the session from storage.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
            session: Rc::new(SessionStore::new(BrowserStorage)),
        }
    }

    /// The session owned by this client.
    pub fn session(&self) -> &SessionStore<BrowserStorage> {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        with_auth: bool,
        verb: &str,
    ) -> Result<(u16, String), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method, self.api_url(path));
        if with_auth {
            for (name, value) in self.session.auth_headers() {
                request = request.header(name, value);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|_| ApiError::transport(verb))?;
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        Ok((status, text))
    }

    fn decode<T: DeserializeOwned>(verb: &str, status: u16, text: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|_| ApiError::RequestFailed {
            status: Some(status),
            message: format!("{verb} failed: invalid response body"),
        })
    }

    async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        verb: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, text) = self.send(method, path, body, true, verb).await?;
        if is_success(status) {
            Self::decode(verb, status, &text)
        } else {
            Err(classify_response(verb, status, &text))
        }
    }

    /// Authenticate with username/password credentials.
    ///
    /// On success the token and user identity are written through to
    /// durable storage before this returns; the caller only has to
    /// schedule the navigation to the landing page.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let (status, text) = self
            .send(Method::POST, "login", Some(&payload), false, "Login")
            .await?;
        if !is_success(status) {
            return Err(credential_failure("Login", status, &text));
        }
        let response: LoginResponse = Self::decode("Login", status, &text)?;
        self.session
            .remember(&response.access_token, response.user.as_ref());
        Ok(response)
    }

    /// Create a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, ApiError> {
        let (status, text) = self
            .send(Method::POST, "register", Some(payload), false, "Registration")
            .await?;
        if is_success(status) {
            Self::decode("Registration", status, &text)
        } else {
            Err(credential_failure("Registration", status, &text))
        }
    }

    /// Forget the current session. Idempotent; no network call.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Fetch the full collection.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let verb = format!("load {}", R::COLLECTION);
        self.request_json(Method::GET, R::COLLECTION, None::<&()>, &verb)
            .await
    }

    /// Fetch one item by id.
    pub async fn fetch<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        let verb = format!("load {}", R::LABEL.to_lowercase());
        self.request_json(
            Method::GET,
            &format!("{}/{id}", R::COLLECTION),
            None::<&()>,
            &verb,
        )
        .await
    }

    /// Create or update an item through the same handler: PUT when an id
    /// is present, POST otherwise. Validates locally first; an invalid
    /// draft never produces a network call.
    pub async fn save<R: Resource>(&self, id: Option<i64>, draft: &R::Draft) -> Result<R, ApiError> {
        R::validate(draft)?;
        let (method, path) = save_target::<R>(id);
        let action = if id.is_some() { "update" } else { "save" };
        let verb = format!("{action} {}", R::LABEL.to_lowercase());
        self.request_json(method, &path, Some(draft), &verb).await
    }

    /// Delete one item by id.
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), ApiError> {
        let verb = format!("delete {}", R::LABEL.to_lowercase());
        let (status, text) = self
            .send(
                Method::DELETE,
                &format!("{}/{id}", R::COLLECTION),
                None::<&()>,
                true,
                &verb,
            )
            .await?;
        if is_success(status) {
            Ok(())
        } else {
            Err(classify_response(&verb, status, &text))
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Method and path for a save: PUT to the item when editing an existing
/// one, POST to the collection when creating.
pub(crate) fn save_target<R: Resource>(id: Option<i64>) -> (Method, String) {
    match id {
        Some(id) => (Method::PUT, format!("{}/{id}", R::COLLECTION)),
        None => (Method::POST, R::COLLECTION.to_string()),
    }
}
