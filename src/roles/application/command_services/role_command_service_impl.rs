use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    roles::domain::{
        model::{
            commands::alter_role_command::AlterRoleCommand, entities::role::Role,
            enums::role_domain_error::RoleDomainError, value_objects::role_name::RoleName,
        },
        services::role_command_service::RoleCommandService,
    },
    shared::infrastructure::executors::statement_executor::StatementExecutor,
};

pub struct RoleCommandServiceImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl RoleCommandServiceImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    async fn run_statement(
        &self,
        action: &'static str,
        statement: &str,
    ) -> Result<(), RoleDomainError> {
        self.executor
            .execute(statement, &[])
            .await
            .map_err(|e| RoleDomainError::Execution {
                action,
                message: e.to_string(),
            })?;

        Ok(())
    }
}

#[async_trait]
impl RoleCommandService for RoleCommandServiceImpl {
    async fn handle_create(&self, role: &Role) -> Result<(), RoleDomainError> {
        self.run_statement("creating", &role.create_statement())
            .await?;

        tracing::info!(role = role.name().value(), "created role");
        Ok(())
    }

    async fn handle_alter(&self, command: &AlterRoleCommand) -> Result<(), RoleDomainError> {
        if !command.has_changes() {
            return Ok(());
        }

        self.run_statement("altering", &command.statement())
            .await?;

        tracing::info!(role = command.name().value(), "altered role");
        Ok(())
    }

    async fn handle_drop(&self, name: &RoleName) -> Result<(), RoleDomainError> {
        let statement = Role::drop_statement(name);
        tracing::debug!(%statement, "dropping role");

        self.run_statement("dropping", &statement).await?;

        tracing::info!(role = name.value(), "dropped role");
        Ok(())
    }
}
