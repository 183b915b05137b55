use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::api::api_handlers::{
    handle_create_sequence, handle_create_sequence_with_exception_handling, handle_find_number,
    handle_find_number_with_exception, handle_find_ratio, handle_get_sequence,
    handle_get_with_exception_handling,
};
use crate::persistence_gateway::{FileGateway, PersistenceGateway};
use crate::utils::Config;

/// Shared by every worker; requests hold no other state.
pub struct AppState {
    pub gateway: Arc<dyn PersistenceGateway>,
    pub sequence_file_name: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            gateway: Arc::new(FileGateway::new(config.data_dir.clone())),
            sequence_file_name: config.sequence_file_name.clone(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/fibonacci")
            .route("/findNumber", web::get().to(handle_find_number))
            .route("/createSequence", web::post().to(handle_create_sequence))
            .route("/getSequence", web::get().to(handle_get_sequence))
            .route("/getWithExceptionHandling", web::get().to(handle_get_with_exception_handling))
            .route(
                "/createSequenceWithExceptionHandling",
                web::post().to(handle_create_sequence_with_exception_handling),
            )
            .route("/findNumberWithException", web::get().to(handle_find_number_with_exception))
            .route("/findRatio", web::get().to(handle_find_ratio)),
    );
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));
    info!(
        host = %config.host,
        port = config.port,
        data_dir = %config.data_dir.display(),
        "server starting"
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }
    server.bind((config.host.as_str(), config.port))?.run().await
}
