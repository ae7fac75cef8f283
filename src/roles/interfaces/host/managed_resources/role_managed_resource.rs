use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    roles::{
        domain::{
            model::{
                commands::alter_role_command::AlterRoleCommand, entities::role::Role,
                enums::role_domain_error::RoleDomainError, value_objects::role_name::RoleName,
            },
            services::{
                role_command_service::RoleCommandService, role_query_service::RoleQueryService,
            },
        },
        interfaces::host::resources::role_resource_data::RoleResourceData,
    },
    shared::interfaces::host::{
        attribute_value::AttributeValue,
        diagnostics::Diagnostics,
        lifecycle::{
            CreateResourceRequest, DeleteResourceRequest, ImportResourceStateRequest,
            ReadResourceRequest, ResourceResponse, UpdateResourceRequest,
        },
        managed_resource::ManagedResource,
    },
};

pub struct RoleManagedResource {
    command_service: Arc<dyn RoleCommandService>,
    query_service: Arc<dyn RoleQueryService>,
}

impl RoleManagedResource {
    pub fn new(
        command_service: Arc<dyn RoleCommandService>,
        query_service: Arc<dyn RoleQueryService>,
    ) -> Self {
        Self {
            command_service,
            query_service,
        }
    }

    fn role_name(data: &RoleResourceData) -> Result<RoleName, Diagnostics> {
        RoleName::new(data.role_id()).map_err(|violation| {
            let mut diagnostics = Diagnostics::new();
            diagnostics.add_violations(&[violation]);
            diagnostics
        })
    }
}

fn to_diagnostics(error: RoleDomainError) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    match &error {
        RoleDomainError::Validation(violations) => diagnostics.add_violations(violations),
        RoleDomainError::Execution { .. } => {
            diagnostics.add_error("Role statement failed", error.to_string())
        }
        RoleDomainError::Query(_) => diagnostics.add_error("Query error", error.to_string()),
        RoleDomainError::Schema(_) => {
            diagnostics.add_error("Query result error", error.to_string())
        }
    }
    diagnostics
}

/// The planned value when it differs from state and is known.
fn changed<T: Clone + PartialEq>(plan: &AttributeValue<T>, state: &AttributeValue<T>) -> Option<T> {
    if plan == state {
        return None;
    }
    plan.known().cloned()
}

#[async_trait]
impl ManagedResource for RoleManagedResource {
    type Data = RoleResourceData;

    const TYPE_NAME: &'static str = "scylla_role";

    async fn create(
        &self,
        request: CreateResourceRequest<RoleResourceData>,
    ) -> ResourceResponse<RoleResourceData> {
        let role = match Role::new(request.config.role_parts()) {
            Ok(role) => role,
            Err(error) => return ResourceResponse::failed(to_diagnostics(error)),
        };

        if let Err(error) = self.command_service.handle_create(&role).await {
            return ResourceResponse::failed(to_diagnostics(error));
        }

        let mut state = request.config;
        state.id = AttributeValue::Known(role.name().value().to_string());
        ResourceResponse::with_state(state)
    }

    async fn read(
        &self,
        request: ReadResourceRequest<RoleResourceData>,
    ) -> ResourceResponse<RoleResourceData> {
        let name = match Self::role_name(&request.state) {
            Ok(name) => name,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };

        let attributes = match self.query_service.handle_find(&name).await {
            Ok(Some(attributes)) => attributes,
            Ok(None) => {
                tracing::warn!(role = name.value(), "role no longer exists");
                return ResourceResponse::removed();
            }
            Err(error) => return ResourceResponse::failed(to_diagnostics(error)),
        };

        let mut state = request.state;
        state.login = AttributeValue::Known(attributes.login);
        state.superuser = AttributeValue::Known(attributes.superuser);
        // Unsupported hash schemes keep the tracked password.
        let drifted = state
            .password
            .known()
            .and_then(|password| attributes.password_matches(password))
            == Some(false);
        if drifted {
            tracing::warn!(
                role = name.value(),
                "server-side password differs from tracked password"
            );
            state.password = AttributeValue::Unknown;
        }
        ResourceResponse::with_state(state)
    }

    async fn update(
        &self,
        request: UpdateResourceRequest<RoleResourceData>,
    ) -> ResourceResponse<RoleResourceData> {
        let name = match Self::role_name(&request.state) {
            Ok(name) => name,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };

        let command = AlterRoleCommand::new(
            name.clone(),
            changed(&request.plan.login, &request.state.login),
            changed(&request.plan.superuser, &request.state.superuser),
            changed(&request.plan.password, &request.state.password),
        );

        if let Err(error) = self.command_service.handle_alter(&command).await {
            return ResourceResponse::failed(to_diagnostics(error));
        }

        let mut state = request.plan;
        state.id = AttributeValue::Known(name.value().to_string());
        ResourceResponse::with_state(state)
    }

    async fn delete(
        &self,
        request: DeleteResourceRequest<RoleResourceData>,
    ) -> ResourceResponse<RoleResourceData> {
        let name = match Self::role_name(&request.state) {
            Ok(name) => name,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };

        match self.command_service.handle_drop(&name).await {
            Ok(()) => ResourceResponse::removed(),
            Err(error) => ResourceResponse::failed(to_diagnostics(error)),
        }
    }

    async fn import_state(
        &self,
        request: ImportResourceStateRequest,
    ) -> ResourceResponse<RoleResourceData> {
        let data = RoleResourceData {
            name: AttributeValue::Known(request.id.clone()),
            id: AttributeValue::Known(request.id),
            ..RoleResourceData::default()
        };

        match Self::role_name(&data) {
            Ok(_) => ResourceResponse::with_state(data),
            Err(diagnostics) => ResourceResponse::failed(diagnostics),
        }
    }
}
