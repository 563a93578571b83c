pub mod middleware;
pub mod routes;

pub use middleware::{log_request_errors, require_session};
pub use routes::{
    QuoteResponse, dashboard, healthz, inspiration, landing, login, login_page, logout, register,
    register_page,
};
