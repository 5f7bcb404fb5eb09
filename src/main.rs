use axum::{routing::get, routing::post, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod api;
mod auth;
mod commands;
mod config;
mod controllers;
mod database;
mod error;
mod handlers;
mod middleware;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("workshop_api=info,tower_http=info")
            }),
        )
        .init();

    tracing::info!("Starting Workshop API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("WORKSHOP_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Workshop API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Token acquisition (no auth)
        .merge(public_user_routes())
        // Bearer-protected API
        .merge(protected_user_routes())
        .merge(admin_user_routes())
        .merge(manufacture_routes())
        .merge(order_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn public_user_routes() -> Router {
    use controllers::users;

    Router::new()
        .route("/users/login", post(users::login))
        .route("/users/register", post(users::register))
}

fn protected_user_routes() -> Router {
    use controllers::users;

    Router::new()
        .route("/users/change-password", post(users::change_password))
        .route("/users/profile", get(users::get_own_profile))
        .route("/users/profile/:user_id", get(users::get_profile))
        .route("/users", get(users::get_all).post(users::create))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

fn admin_user_routes() -> Router {
    use axum::routing::put;
    use controllers::users;

    // Authorization is middleware composition: jwt_auth first, then the role
    // guard, then the handler
    Router::new()
        .route("/users/:user_id", put(users::edit).delete(users::delete))
        .route_layer(axum::middleware::from_fn(middleware::require_super_admin))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

fn manufacture_routes() -> Router {
    use controllers::manufacture;

    Router::new()
        .route("/manufacture/:manufacture_id", get(manufacture::get_job))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

fn order_routes() -> Router {
    use controllers::orders;

    Router::new()
        .route("/orders", get(orders::get_all))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Workshop API",
            "version": version,
            "description": "Line-of-business backend: users, manufacture jobs, order summaries",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/users/login, /users/register (public - token acquisition)",
                "users": "/users, /users/profile[/:id], /users/change-password (protected)",
                "admin": "/users/:id PUT|DELETE (SuperAdmin)",
                "manufacture": "/manufacture/:id (protected)",
                "orders": "/orders (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            // Detail stays server-side; clients only learn the service is degraded
            tracing::error!("Health check failed: {}", e);
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                axum::response::Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database": "unavailable"
                    }
                })),
            )
        }
    }
}
