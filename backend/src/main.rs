use actix_web::{web, App, HttpServer};
use backend::dashboard::CsvSupplyChainRepository;
use log::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let config = match backend::config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    if config.is_development() {
        log::warn!("Running in development mode");
    }

    let repo = web::Data::new(CsvSupplyChainRepository::new(config.data.csv_path.clone()));

    log::info!("Starting server on {}:{}", config.server.host, config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(backend::middleware::Logger)
            .wrap(backend::middleware::cors_middleware())
            .service(backend::health::health_check)
            .configure(|cfg| {
                log::debug!("Registering /api/dashboard routes");
                backend::dashboard::configure_routes(cfg, repo.clone());
            })
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
