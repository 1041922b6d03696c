// src/bin/api_server.rs

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vertex_site_api::infra::config;
use vertex_site_api::transport;
use vertex_site_api::ContentService;
use vertex_site_api::ContentStore;
use vertex_site_api::HttpMailer;
use vertex_site_api::RecaptchaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // --- Content Store Initialization ---
    // Malformed bundled content is a fatal startup error, not something to
    // limp along with.
    let store = Arc::new(ContentStore::load()?);
    info!(
        services = store.services().len(),
        case_studies = store.case_studies().len(),
        posts = store.blog_posts().len(),
        testimonials = store.testimonials().len(),
        team = store.team().len(),
        "content store loaded"
    );

    // --- Service Initialization ---
    let fetch_delay = config::content_fetch_delay();
    if !fetch_delay.is_zero() {
        info!(?fetch_delay, "artificial content fetch delay enabled");
    }
    let content = ContentService::new(store).with_fetch_delay(fetch_delay);

    let app_state = transport::http::AppState {
        content,
        captcha: Arc::new(RecaptchaClient::new()),
        mailer: Arc::new(HttpMailer::new()),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
