pub mod availability;
pub mod create;
pub mod delete;
pub mod health;
pub mod purge;
pub mod resolve;
pub mod session;

pub use availability::new_short_id_handler;
pub use create::create_short_url_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use purge::purge_expired_handler;
pub use resolve::resolve_handler;
pub use session::session_urls_handler;
