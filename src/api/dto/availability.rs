//! DTOs for the short code availability endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    /// The short code to probe.
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    /// The probed code.
    pub id: String,
    /// The probed code when free, otherwise a fresh available candidate.
    pub new_id: String,
    /// Whether the probed code is already taken.
    pub exists: bool,
}
