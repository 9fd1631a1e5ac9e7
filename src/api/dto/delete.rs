//! Query parameters for owner-authorized deletion.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
    pub session_token: Option<String>,
}
