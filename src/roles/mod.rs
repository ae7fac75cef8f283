use std::sync::Arc;

use axum::Router;

use crate::{
    roles::{
        application::{
            command_services::role_command_service_impl::RoleCommandServiceImpl,
            query_services::role_query_service_impl::RoleQueryServiceImpl,
        },
        interfaces::host::managed_resources::role_managed_resource::RoleManagedResource,
    },
    shared::{
        infrastructure::executors::statement_executor::StatementExecutor,
        interfaces::rest::controllers::resource_lifecycle_rest_controller::resource_router,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_roles_router(executor: Arc<dyn StatementExecutor>) -> Router {
    let command_service = Arc::new(RoleCommandServiceImpl::new(executor.clone()));
    let query_service = Arc::new(RoleQueryServiceImpl::new(executor));

    resource_router(Arc::new(RoleManagedResource::new(
        command_service,
        query_service,
    )))
}
