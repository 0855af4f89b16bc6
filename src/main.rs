use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use clinic_mock_api::application::auth_responder::MockAuthService;
use clinic_mock_api::data::canned::CannedUserDirectory;
use clinic_mock_api::infrastructure::environment::{ApiMode, resolve_api_base_url};
use clinic_mock_api::infrastructure::logging::init_logging;
use clinic_mock_api::presentation::handlers::{AppState, health_check, login, logout, me, signup};
use clinic_mock_api::presentation::middleware::RequestLogMiddleware;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_logging();
    info!("Logging initialized");

    let mode = ApiMode::from_env();
    let base_url = resolve_api_base_url(mode);
    info!(mode = ?mode, base_url = %base_url, "Resolved API environment");

    info!("Creating canned user directory");
    let directory = CannedUserDirectory::new();

    info!("Creating mock auth service");
    let auth = MockAuthService::new(Arc::new(directory));
    let state = web::Data::new(AppState { auth });

    info!("Configuring HTTP server");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestLogMiddleware)
            // The frontend under test calls the mock cross-origin
            .wrap(Cors::permissive())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health_check))
                    .route("/auth/login", web::post().to(login))
                    .route("/auth/signup", web::post().to(signup))
                    .route("/auth/logout", web::post().to(logout))
                    .route("/auth/me", web::get().to(me)),
            )
    });

    let bind_addr = "127.0.0.1:8080";
    info!(address = %bind_addr, "Binding mock server");
    let server = server.bind(bind_addr)?;

    info!(
        address = %bind_addr,
        routes = %"GET /api/health, POST /api/auth/login, POST /api/auth/signup, POST /api/auth/logout, GET /api/auth/me",
        "Starting mock server"
    );
    server.run().await
}
