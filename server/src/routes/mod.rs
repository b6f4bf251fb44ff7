//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API, the uploaded-image static service, and
//! Leptos SSR rendering under a single Axum router. Admin page requests pass
//! through the edge route guard before any HTML is produced.

pub mod about;
pub mod auth;
pub mod contact;
pub mod guard;
pub mod projects;
pub mod upload;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// JSON API routes plus the uploaded-image static service.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads_service = ServeDir::new(&state.upload_dir);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/profile", get(auth::profile))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/projects", get(projects::list_projects).post(projects::create_project))
        .route(
            "/api/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/api/about", get(about::get_about).put(about::update_about))
        .route("/api/contact", post(contact::submit).get(contact::list))
        .route("/api/contact/{id}", get(contact::get).delete(contact::delete))
        .route("/api/contact/{id}/reply", put(contact::reply))
        .route("/api/contact/{id}/status", patch(contact::set_status))
        .route("/api/upload/images", post(upload::upload_images))
        .route("/api/upload/{filename}", delete(upload::delete_image))
        .route("/healthz", get(healthz))
        .nest_service("/uploads", uploads_service)
        .layer(cors)
        .with_state(state)
}

/// Full application router: JSON API + guarded Leptos SSR pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .layer(axum::middleware::from_fn(guard::admin_guard))
        .with_state(leptos_options.clone());

    let site_root_path = std::path::PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
