pub mod api;
pub mod app_state;
pub mod catalog;
pub mod config;
pub mod course;
pub mod credentials;
pub mod error;
pub mod quote;
pub mod session;
pub mod supabase;
pub mod views;

use axum::Router;
use axum::extract::Extension;
use axum::http::Method;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

//
// Re-export
//
pub use api::{
    dashboard, healthz, inspiration, landing, log_request_errors, login, login_page, logout, register,
    register_page, require_session,
};
pub use app_state::AppState;
pub use config::Config;
pub use course::{CourseBrowser, DashboardQuery, Lesson, group_by_module};
pub use credentials::{AuthMode, localize_auth_error};
pub use quote::QuoteClient;
pub use session::CurrentUser;
pub use supabase::{Session, SignUpOutcome, SupabaseClient, SupabaseError, User};

/// Build the portal router on top of an initialized state.
pub fn router(state: AppState) -> Router {
    // Only the JSON endpoint is meant for other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    // Pages that need a signed-in user
    let protected = Router::new()
        .route("/dashboard", get(dashboard))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let json_api = Router::new().route("/quote", get(inspiration)).layer(cors);

    Router::new()
        .route("/", get(landing))
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/logout", post(logout))
        .route("/healthz", get(healthz))
        .merge(protected)
        .nest("/api", json_api)
        .nest_service("/images", ServeDir::new(state.images_dir()))
        .route_service("/styles.css", ServeFile::new(state.stylesheet()))
        .layer(axum::middleware::from_fn(log_request_errors))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;
    info!(assets_dir = %state.assets_dir.display(), "Serving static assets");
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.listen_on_port);
    info!("Portal listening on {addr}");
    let listener = TcpListener::bind(&addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
