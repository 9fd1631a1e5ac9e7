pub mod availability;
pub mod create;
pub mod delete;
pub mod health;
pub mod resolve;
pub mod session;

use serde::Serialize;

/// Standard success envelope: `{"result": ...}`.
#[derive(Debug, Serialize)]
pub struct ResultBody<T> {
    pub result: T,
}
