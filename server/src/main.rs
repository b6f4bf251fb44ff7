#![recursion_limit = "256"]

mod db;
mod envelope;
mod errors;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Initialize mailer (non-fatal: contact replies are saved without sending
    // when mail env vars are missing).
    let mailer = match services::mailer::Mailer::from_env() {
        Some(mailer) => {
            tracing::info!("mailer initialized");
            Some(mailer)
        }
        None => {
            tracing::warn!("RESEND_API_KEY/RESEND_FROM not set — contact reply mail disabled");
            None
        }
    };

    let state = state::AppState::new(pool, mailer);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "site server listening");
    axum::serve(listener, app).await.expect("server failed");
}
