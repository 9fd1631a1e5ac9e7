//! Query parameters for listing a session's records.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SessionParams {
    pub session_token: Option<String>,
}
