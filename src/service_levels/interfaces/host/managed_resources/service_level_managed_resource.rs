use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    service_levels::{
        domain::{
            model::{
                commands::alter_service_level_command::AlterServiceLevelCommand,
                entities::service_level::{ServiceLevel, ServiceLevelSettings},
                enums::service_level_domain_error::ServiceLevelDomainError,
                value_objects::service_level_name::ServiceLevelName,
            },
            services::{
                service_level_command_service::ServiceLevelCommandService,
                service_level_query_service::ServiceLevelQueryService,
            },
        },
        interfaces::host::resources::service_level_resource_data::ServiceLevelResourceData,
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

pub struct ServiceLevelManagedResource {
    command_service: Arc<dyn ServiceLevelCommandService>,
    query_service: Arc<dyn ServiceLevelQueryService>,
}

impl ServiceLevelManagedResource {
    pub fn new(
        command_service: Arc<dyn ServiceLevelCommandService>,
        query_service: Arc<dyn ServiceLevelQueryService>,
    ) -> Self {
        Self {
            command_service,
            query_service,
        }
    }

    fn service_level_name(data: &ServiceLevelResourceData) -> Result<ServiceLevelName, Diagnostics> {
        ServiceLevelName::new(data.service_level_id()).map_err(|violation| {
            let mut diagnostics = Diagnostics::new();
            diagnostics.add_violations(&[violation]);
            diagnostics
        })
    }

    /// Reads the service level back into `data`; `None` once it is gone.
    async fn refresh(
        &self,
        name: &ServiceLevelName,
        mut data: ServiceLevelResourceData,
    ) -> ResourceResponse<ServiceLevelResourceData> {
        match self.query_service.handle_find(name).await {
            Ok(Some(attributes)) => {
                data.apply(attributes);
                ResourceResponse::with_state(data)
            }
            Ok(None) => {
                tracing::warn!(service_level = name.value(), "service level no longer exists");
                ResourceResponse::removed()
            }
            Err(error) => ResourceResponse::failed(to_diagnostics(error)),
        }
    }
}

fn to_diagnostics(error: ServiceLevelDomainError) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    match &error {
        ServiceLevelDomainError::Validation(violations) => diagnostics.add_violations(violations),
        ServiceLevelDomainError::Execution { .. } => {
            diagnostics.add_error("Service level statement failed", error.to_string())
        }
        ServiceLevelDomainError::Query(_) | ServiceLevelDomainError::Schema(_) => {
            diagnostics.add_error("Query error", error.to_string())
        }
    }
    diagnostics
}

/// The validated planned value when the attribute differs from state.
fn changed<A: PartialEq, T>(
    plan: &AttributeValue<A>,
    state: &AttributeValue<A>,
    validated: Option<T>,
) -> Option<T> {
    if plan == state { None } else { validated }
}

#[async_trait]
impl ManagedResource for ServiceLevelManagedResource {
    type Data = ServiceLevelResourceData;

    const TYPE_NAME: &'static str = "scylla_service_level";

    async fn create(
        &self,
        request: CreateResourceRequest<ServiceLevelResourceData>,
    ) -> ResourceResponse<ServiceLevelResourceData> {
        let service_level = match ServiceLevel::new(request.config.service_level_parts()) {
            Ok(service_level) => service_level,
            Err(error) => return ResourceResponse::failed(to_diagnostics(error)),
        };

        if let Err(error) = self.command_service.handle_create(&service_level).await {
            return ResourceResponse::failed(to_diagnostics(error));
        }

        let mut state = request.config;
        state.id = AttributeValue::Known(service_level.name().value().to_string());
        state.settle_unknown();
        ResourceResponse::with_state(state)
    }

    async fn read(
        &self,
        request: ReadResourceRequest<ServiceLevelResourceData>,
    ) -> ResourceResponse<ServiceLevelResourceData> {
        match Self::service_level_name(&request.state) {
            Ok(name) => self.refresh(&name, request.state).await,
            Err(diagnostics) => ResourceResponse::failed(diagnostics),
        }
    }

    async fn update(
        &self,
        request: UpdateResourceRequest<ServiceLevelResourceData>,
    ) -> ResourceResponse<ServiceLevelResourceData> {
        let name = match Self::service_level_name(&request.state) {
            Ok(name) => name,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };
        let planned = match ServiceLevel::new(request.plan.service_level_parts()) {
            Ok(service_level) => *service_level.settings(),
            Err(error) => return ResourceResponse::failed(to_diagnostics(error)),
        };

        let (plan, state) = (&request.plan, &request.state);
        let changes = ServiceLevelSettings {
            shares: changed(&plan.shares, &state.shares, planned.shares),
            workload_type: changed(&plan.workload_type, &state.workload_type, planned.workload_type),
            timeout_milliseconds: changed(
                &plan.timeout_milliseconds,
                &state.timeout_milliseconds,
                planned.timeout_milliseconds,
            ),
        };

        let command = AlterServiceLevelCommand::new(name.clone(), changes);
        if let Err(error) = self.command_service.handle_alter(&command).await {
            return ResourceResponse::failed(to_diagnostics(error));
        }

        let mut state = request.plan;
        state.id = AttributeValue::Known(name.value().to_string());
        self.refresh(&name, state).await
    }

    async fn delete(
        &self,
        request: DeleteResourceRequest<ServiceLevelResourceData>,
    ) -> ResourceResponse<ServiceLevelResourceData> {
        let name = match Self::service_level_name(&request.state) {
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
    ) -> ResourceResponse<ServiceLevelResourceData> {
        let data = ServiceLevelResourceData {
            name: AttributeValue::Known(request.id.clone()),
            id: AttributeValue::Known(request.id),
            ..ServiceLevelResourceData::default()
        };

        match Self::service_level_name(&data) {
            Ok(_) => ResourceResponse::with_state(data),
            Err(diagnostics) => ResourceResponse::failed(diagnostics),
        }
    }
}
