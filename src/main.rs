use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use scylla_declarative_api::{
    config::app_config::AppConfig,
    grants::build_grants_router,
    roles::build_roles_router,
    service_levels::build_service_levels_router,
    shared::infrastructure::executors::{
        scylla::scylla_statement_executor_impl::ScyllaStatementExecutorImpl,
        statement_executor::StatementExecutor,
    },
};
use tracing_subscriber::EnvFilter;
use validator::Validate;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    config.validate().expect("invalid configuration");

    let executor: Arc<dyn StatementExecutor> =
        Arc::new(ScyllaStatementExecutorImpl::new(&config));

    let app = Router::new()
        .merge(build_grants_router(executor.clone()))
        .merge(build_roles_router(executor.clone()))
        .merge(build_service_levels_router(executor));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, hosts = ?config.scylla_hosts, "lifecycle host listening");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
