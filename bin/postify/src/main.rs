//! # Postify Binary
//!
//! The entry point that assembles the board from its plugin crates.

mod config;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use postify_api::{middleware, AppState};
use postify_core::{BoardService, ReportSink};
use postify_db_sqlite::SqlitePostStore;
use postify_report::{DisabledReporter, WebhookReporter};

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    let store = SqlitePostStore::connect(&config.database_url).await?;

    let reports: Arc<dyn ReportSink> = match &config.webhook_url {
        Some(url) => Arc::new(WebhookReporter::new(url.clone())),
        None => {
            log::warn!("POSTIFY_WEBHOOK_URL not set; reports will be dropped");
            Arc::new(DisabledReporter)
        }
    };

    let board = BoardService::new(Arc::new(store), reports);
    let state = web::Data::new(AppState { board });

    log::info!("postify listening on http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .configure(postify_api::configure_routes)
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}
