pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::topic;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetFilteredTopicsService, GetPaginatedTopicsService,
    GetTopicService, GetTopicsService, UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;


#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
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

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    // Topic store and use cases
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        topic: TopicUseCases {
            create: Arc::new(CreateTopicService::new(
                topic_query.clone(),
                topic_repo.clone(),
            )),
            get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
            get_single: Arc::new(GetTopicService::new(topic_query.clone())),
            update: Arc::new(UpdateTopicService::new(
                topic_query.clone(),
                topic_repo.clone(),
            )),
            delete: Arc::new(DeleteTopicService::new(topic_query.clone(), topic_repo)),
            get_paginated: Arc::new(GetPaginatedTopicsService::new(topic_query.clone())),
            get_filtered: Arc::new(GetFilteredTopicsService::new(topic_query)),
        },
    };

    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server terminated with an error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topic: literal segments before `/topicos/{id}`
    cfg.service(crate::topic::adapter::incoming::web::routes::get_paginated_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_filtered_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
