use std::sync::Arc;

use scylla_declarative_api::{
    roles::{
        application::{
            command_services::role_command_service_impl::RoleCommandServiceImpl,
            query_services::role_query_service_impl::RoleQueryServiceImpl,
        },
        interfaces::host::managed_resources::role_managed_resource::RoleManagedResource,
    },
    shared::{
        domain::model::{
            entities::query_result::QueryResult,
            enums::statement_execution_error::StatementExecutionError,
        },
        infrastructure::executors::statement_executor::StatementExecutor,
    },
};

use super::fakes::FakeStatementExecutor;

pub struct RoleTestHarness {
    pub executor: Arc<FakeStatementExecutor>,
    pub command_service: Arc<RoleCommandServiceImpl>,
    pub query_service: Arc<RoleQueryServiceImpl>,
    pub resource: RoleManagedResource,
}

pub fn create_harness(
    responses: Vec<Result<QueryResult, StatementExecutionError>>,
) -> RoleTestHarness {
    let executor = Arc::new(FakeStatementExecutor::with_responses(responses));
    let shared_executor: Arc<dyn StatementExecutor> = executor.clone();

    let command_service = Arc::new(RoleCommandServiceImpl::new(shared_executor.clone()));
    let query_service = Arc::new(RoleQueryServiceImpl::new(shared_executor));
    let resource = RoleManagedResource::new(command_service.clone(), query_service.clone());

    RoleTestHarness {
        executor,
        command_service,
        query_service,
        resource,
    }
}
