use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    service_levels::domain::{
        model::{
            commands::alter_service_level_command::AlterServiceLevelCommand,
            entities::service_level::ServiceLevel,
            enums::service_level_domain_error::ServiceLevelDomainError,
            value_objects::service_level_name::ServiceLevelName,
        },
        services::service_level_command_service::ServiceLevelCommandService,
    },
    shared::infrastructure::executors::statement_executor::StatementExecutor,
};

pub struct ServiceLevelCommandServiceImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl ServiceLevelCommandServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    async fn run_statement(
        &self,
        action: &'static str,
        statement: &str,
    ) -> Result<(), ServiceLevelDomainError> {
        tracing::debug!(%statement, "executing service level statement");

        self.executor
            .execute(statement, &[])
            .await
            .map_err(|e| ServiceLevelDomainError::Execution {
                action,
                message: e.to_string(),
            })?;

        Ok(())
    }
}

#[async_trait]
impl ServiceLevelCommandService for ServiceLevelCommandServiceImpl {
    async fn handle_create(
        &self,
        service_level: &ServiceLevel,
    ) -> Result<(), ServiceLevelDomainError> {
        self.run_statement("creating", &service_level.create_statement())
            .await?;

        tracing::info!(
            service_level = service_level.name().value(),
            "created service level"
        );
        Ok(())
    }

    async fn handle_alter(
        &self,
        command: &AlterServiceLevelCommand,
    ) -> Result<(), ServiceLevelDomainError> {
        if !command.has_changes() {
            return Ok(());
        }

        self.run_statement("altering", &command.statement()).await?;

        tracing::info!(
            service_level = command.name().value(),
            "altered service level"
        );
        Ok(())
    }

    async fn handle_drop(&self, name: &ServiceLevelName) -> Result<(), ServiceLevelDomainError> {
        self.run_statement("dropping", &ServiceLevel::drop_statement(name))
            .await?;

        tracing::info!(service_level = name.value(), "dropped service level");
        Ok(())
    }
}
