//! End-to-end test infrastructure.
//!
//! [`TestEnvironment`] writes a dataset to a temporary CSV file and starts
//! the real backend on an ephemeral local port. The CSV is removed when the
//! environment is dropped.

use actix_web::{dev::ServerHandle, web, App, HttpServer};
use anyhow::{Context, Result};
use backend::dashboard::CsvSupplyChainRepository;
use frontend::{Config, DashboardClient};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Small dataset in the column layout of the production export
pub const SAMPLE_CSV: &str = "\
Product type,SKU,Price,Availability,Number of products sold,Revenue generated,Customer demographics,Stock levels,Defect rates,Shipping carriers,Transportation modes,Shipping costs,Location
haircare,SKU0,69.81,55,802,8661.99,Non-binary,58,0.23,Carrier B,Road,2.96,Mumbai
skincare,SKU1,14.84,95,736,7460.90,Female,53,4.85,Carrier A,Road,9.72,Mumbai
haircare,SKU2,11.32,34,8,9577.75,Unknown,1,4.58,Carrier B,Air,8.05,Kolkata
skincare,SKU3,61.16,68,83,7766.84,Non-binary,23,4.75,Carrier C,Rail,1.73,Delhi
";

pub struct TestEnvironment {
    addr: SocketAddr,
    data_path: PathBuf,
    handle: ServerHandle,
}

impl TestEnvironment {
    /// Starts the backend serving `csv` as its dataset.
    pub async fn with_dataset(csv: &str) -> Result<Self> {
        let data_path = std::env::temp_dir().join(format!("supply_chain_{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&data_path, csv).context("Failed to write test dataset")?;
        Self::start(data_path).await
    }

    /// Starts the backend pointed at a path that does not exist.
    pub async fn without_dataset() -> Result<Self> {
        let data_path = std::env::temp_dir().join(format!("missing_{}.csv", uuid::Uuid::new_v4()));
        Self::start(data_path).await
    }

    async fn start(data_path: PathBuf) -> Result<Self> {
        let repo = web::Data::new(CsvSupplyChainRepository::new(data_path.clone()));

        let server = HttpServer::new(move || {
            App::new()
                .wrap(backend::middleware::Logger)
                .wrap(backend::middleware::cors_middleware())
                .service(backend::health::health_check)
                .configure(|cfg| backend::dashboard::configure_routes(cfg, repo.clone()))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .context("Failed to bind test server")?;

        let addr = *server
            .addrs()
            .first()
            .context("Test server has no bound address")?;
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        log::info!("Started test backend at http://{}", addr);

        Ok(Self {
            addr,
            data_path,
            handle,
        })
    }

    /// Origin the backend is reachable at, e.g. `http://127.0.0.1:41234`
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL a development build of the UI would use against this backend
    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.origin())
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn client(&self) -> DashboardClient {
        DashboardClient::new(Config::new(self.api_base_url()))
    }

    pub async fn shutdown(self) {
        self.handle.stop(true).await;
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        std::fs::remove_file(&self.data_path).ok();
    }
}
