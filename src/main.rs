pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::content;
pub use modules::editor;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::content::adapter::outgoing::file_document_store::FileDocumentStore;
use crate::content::adapter::outgoing::file_local_state::FileLocalStateStore;
use crate::content::adapter::outgoing::http_document_store::HttpDocumentStore;
use crate::content::application::content_store::ContentStore;
use crate::content::application::ports::outgoing::{DocumentStore, RawJsonSink};
use crate::editor::application::services::{CollectionEditor, SectionEditor, ValidationRegistry};
use crate::editor::application::use_cases::{
    ExportContentUseCase, ImportContentUseCase, SaveContentUseCase,
};
use crate::shared::api::{custom_json_config, MAX_JSON_BODY_BYTES};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content_store: Arc<ContentStore>,
    pub document_store: Arc<dyn DocumentStore>,
    pub raw_sink: Arc<dyn RawJsonSink>,
    pub registry: Arc<ValidationRegistry>,
    pub collection_editor: Arc<CollectionEditor>,
    pub section_editor: Arc<SectionEditor>,
    pub save_content: Arc<SaveContentUseCase>,
    pub import_content: Arc<ImportContentUseCase>,
    pub export_content: Arc<ExportContentUseCase>,
}

impl AppState {
    pub fn build(
        content_store: Arc<ContentStore>,
        document_store: Arc<dyn DocumentStore>,
        raw_sink: Arc<dyn RawJsonSink>,
    ) -> Self {
        let registry = Arc::new(ValidationRegistry::default());
        Self {
            collection_editor: Arc::new(CollectionEditor::new(
                Arc::clone(&content_store),
                Arc::clone(&registry),
            )),
            section_editor: Arc::new(SectionEditor::new(
                Arc::clone(&content_store),
                Arc::clone(&registry),
            )),
            save_content: Arc::new(SaveContentUseCase::new(
                Arc::clone(&content_store),
                Arc::clone(&registry),
            )),
            import_content: Arc::new(ImportContentUseCase::new(Arc::clone(&content_store))),
            export_content: Arc::new(ExportContentUseCase::new(Arc::clone(&content_store))),
            content_store,
            document_store,
            raw_sink,
            registry,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    std::fs::create_dir_all(&config.data_dir)?;

    let file_store = Arc::new(FileDocumentStore::new(config.data_dir.join("portfolio.json")));
    let raw_sink: Arc<dyn RawJsonSink> = Arc::clone(&file_store) as Arc<dyn RawJsonSink>;

    // The document store the editor saves through: the remote HTTP gateway
    // when configured, otherwise the local data file directly.
    let document_store: Arc<dyn DocumentStore> = match &config.remote_base_url {
        Some(base_url) => {
            info!("using remote document store at {base_url}");
            Arc::new(HttpDocumentStore::new(base_url.clone(), config.save_timeout)?)
        }
        None => {
            info!("using file document store in {}", config.data_dir.display());
            Arc::clone(&file_store) as Arc<dyn DocumentStore>
        }
    };

    let local_state = Arc::new(FileLocalStateStore::new(config.data_dir.join("local_state")));
    let content_store = Arc::new(
        ContentStore::resolve(
            Arc::clone(&document_store),
            local_state,
            config.mode,
            config.save_timeout,
        )
        .await,
    );

    let state = AppState::build(content_store, document_store, raw_sink);

    let server_url = config.bind_address();
    info!("Server run on: {server_url}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(MAX_JSON_BODY_BYTES))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::replace_portfolio_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_raw_handler);
    // Editor: entity collections
    cfg.service(crate::editor::adapter::incoming::web::routes::add_project_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::add_experience_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::delete_experience_handler);
    // Editor: positional collections
    cfg.service(crate::editor::adapter::incoming::web::routes::add_collection_item_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::update_collection_item_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::delete_collection_item_handler);
    // Editor: sections
    cfg.service(crate::editor::adapter::incoming::web::routes::update_section_handler);
    // Editor: workflow
    cfg.service(crate::editor::adapter::incoming::web::routes::save_portfolio_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::import_portfolio_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::export_portfolio_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::encode_upload_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::get_validation_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
