use std::sync::Arc;

use scylla_declarative_api::{
    service_levels::{
        application::{
            command_services::service_level_command_service_impl::ServiceLevelCommandServiceImpl,
            query_services::service_level_query_service_impl::ServiceLevelQueryServiceImpl,
        },
        interfaces::host::managed_resources::service_level_managed_resource::ServiceLevelManagedResource,
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

pub struct ServiceLevelTestHarness {
    pub executor: Arc<FakeStatementExecutor>,
    pub query_service: Arc<ServiceLevelQueryServiceImpl>,
    pub resource: ServiceLevelManagedResource,
}

pub fn create_harness(
    responses: Vec<Result<QueryResult, StatementExecutionError>>,
) -> ServiceLevelTestHarness {
    let executor = Arc::new(FakeStatementExecutor::with_responses(responses));
    let shared_executor: Arc<dyn StatementExecutor> = executor.clone();

    let command_service = Arc::new(ServiceLevelCommandServiceImpl::new(shared_executor.clone()));
    let query_service = Arc::new(ServiceLevelQueryServiceImpl::new(shared_executor));
    let resource = ServiceLevelManagedResource::new(command_service, query_service.clone());

    ServiceLevelTestHarness {
        executor,
        query_service,
        resource,
    }
}
