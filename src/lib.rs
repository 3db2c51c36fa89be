//! Vendor intake service: form pages plus the multipart submission API.

use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod routes;
pub mod services;

use crate::models::config::ServerConfig;

/// Overall multipart payload cap. Large enough that an oversized attachment
/// is still read and reported as a field error instead of a transport error.
const PAYLOAD_LIMIT_BYTES: usize = 64 * 1024 * 1024;

pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .app_data(MultipartFormConfig::default().total_limit(PAYLOAD_LIMIT_BYTES))
            .wrap(Logger::default())
            .service(routes::main::index)
            .service(routes::main::vendors)
            .service(routes::main::submit_vendor)
            .service(Files::new("/static", "./static"))
    })
    .bind((server_config.address.as_str(), server_config.port))?
    .run()
    .await
}
