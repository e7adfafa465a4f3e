use actix_web::{web, App, HttpServer};
use pinochle_backend::config::ServerConfig;
use pinochle_backend::middleware::request_trace::RequestTrace;
use pinochle_backend::middleware::structured_logger::StructuredLogger;
use pinochle_backend::routes;
use pinochle_backend::state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // PINOCHLE_HOST, PINOCHLE_PORT and PINOCHLE_DEAL_SEED come from the runtime environment.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };
    let host = config.host.clone();
    let port = config.port;

    info!(
        host = %host,
        port,
        deal_seed = ?config.deal_seed,
        "Starting pinochle backend"
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
