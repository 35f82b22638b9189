//! The user roster behind the sidebar.
//!
//! Users come from a single `GET {server}/users` request. The response is
//! decoded into typed records so a malformed body is a reported error
//! instead of an empty sidebar.

use serde::{Deserialize, Serialize};

/// A chat partner as returned by the `/users` endpoint.
///
/// Usernames are externally supplied; uniqueness is assumed but not
/// enforced, so duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// Errors from fetching or decoding the roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed user list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a `/users` response body.
///
/// The endpoint must return a JSON array of objects each carrying a
/// `username` string field; response order is preserved.
pub fn decode_users(body: &str) -> Result<Vec<User>, RosterError> {
    let users: Vec<User> = serde_json::from_str(body)?;
    Ok(users)
}

/// Fetch the roster from `{server}/users`.
pub async fn fetch_users(
    client: &reqwest::Client,
    server: &str,
) -> Result<Vec<User>, RosterError> {
    let url = format!("{}/users", server.trim_end_matches('/'));
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RosterError::Status(status));
    }
    let body = response.text().await?;
    decode_users(&body)
}
