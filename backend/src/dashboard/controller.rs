use actix_web::{get, web, HttpResponse};
use log::{debug, warn};
use shared::{ErrorResponse, SharedError};

use crate::dashboard::engine::build_dashboard;
use crate::dashboard::repository::CsvSupplyChainRepository;
use crate::error::ApiError;

/// Serves the aggregated supply chain dashboard.
///
/// The CSV is parsed on the blocking pool so a large export does not stall
/// the worker's event loop.
#[get("/dashboard")]
pub async fn get_dashboard_handler(
    repo: web::Data<CsvSupplyChainRepository>,
) -> Result<HttpResponse, ApiError> {
    let repo = repo.into_inner();
    let path = repo.path().to_path_buf();
    let result = web::block(move || repo.load().map(|rows| build_dashboard(&rows))).await?;

    match result {
        Ok(dashboard) => {
            debug!("Serving dashboard with {} inventory rows", dashboard.inventory.len());
            Ok(HttpResponse::Ok().json(dashboard))
        }
        Err(SharedError::NotFound(_)) => {
            warn!("Dashboard requested but {} does not exist", path.display());
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Data file not found")))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, repo: web::Data<CsvSupplyChainRepository>) {
    cfg.service(
        web::scope("/api")
            .app_data(repo)
            .service(get_dashboard_handler),
    );
}
