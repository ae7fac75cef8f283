use std::sync::Arc;

use axum::Router;

use crate::{
    grants::{
        application::{
            command_services::grant_command_service_impl::GrantCommandServiceImpl,
            query_services::grant_query_service_impl::GrantQueryServiceImpl,
        },
        interfaces::host::{
            managed_resources::grant_managed_resource::GrantManagedResource,
            resources::{
                keyspace_grant_resource_data::KeyspaceGrantResourceData,
                table_grant_resource_data::TableGrantResourceData,
            },
        },
    },
    shared::{
        infrastructure::executors::statement_executor::StatementExecutor,
        interfaces::rest::controllers::resource_lifecycle_rest_controller::resource_router,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_grants_router(executor: Arc<dyn StatementExecutor>) -> Router {
    let command_service = Arc::new(GrantCommandServiceImpl::new(executor.clone()));
    let query_service = Arc::new(GrantQueryServiceImpl::new(executor));

    let keyspace_grants = Arc::new(GrantManagedResource::<KeyspaceGrantResourceData>::new(
        command_service.clone(),
        query_service.clone(),
    ));
    let table_grants = Arc::new(GrantManagedResource::<TableGrantResourceData>::new(
        command_service,
        query_service,
    ));

    Router::new()
        .merge(resource_router(keyspace_grants))
        .merge(resource_router(table_grants))
}
