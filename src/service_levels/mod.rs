use std::sync::Arc;

use axum::Router;

use crate::{
    service_levels::{
        application::{
            command_services::service_level_command_service_impl::ServiceLevelCommandServiceImpl,
            query_services::service_level_query_service_impl::ServiceLevelQueryServiceImpl,
        },
        interfaces::host::managed_resources::service_level_managed_resource::ServiceLevelManagedResource,
    },
    shared::{
        infrastructure::executors::statement_executor::StatementExecutor,
        interfaces::rest::controllers::resource_lifecycle_rest_controller::resource_router,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_service_levels_router(executor: Arc<dyn StatementExecutor>) -> Router {
    let command_service = Arc::new(ServiceLevelCommandServiceImpl::new(executor.clone()));
    let query_service = Arc::new(ServiceLevelQueryServiceImpl::new(executor));

    resource_router(Arc::new(ServiceLevelManagedResource::new(
        command_service,
        query_service,
    )))
}
