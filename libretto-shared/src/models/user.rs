use serde::{Deserialize, Serialize};

/// Represents a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The desired username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to authenticate with username and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's username.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,

    /// Token scheme advertised by the server, usually `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,

    /// The signed-in user, when the server includes it.
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_roundtrip() {
        let user = User {
            id: 42,
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn login_response_user_is_optional() {
        let json = r#"{"access_token":"abc123","token_type":"bearer"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc123");
        assert_eq!(response.token_type.as_deref(), Some("bearer"));
        assert_eq!(response.user, None);
    }

    #[test]
    fn login_response_carries_user_when_present() {
        let json = r#"{"access_token":"abc123","user":{"id":1,"username":"reader","email":"reader@example.com"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let user = response.user.unwrap();
        assert_eq!(user.username, "reader");
        assert_eq!(response.token_type, None);
    }

    #[test]
    fn register_request_serializes_all_fields() {
        let request = RegisterRequest {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"username\""));
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
    }
}
