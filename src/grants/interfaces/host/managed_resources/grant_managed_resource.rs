use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use crate::{
    grants::{
        domain::{
            model::{
                entities::grant::Grant, enums::grant_domain_error::GrantDomainError,
            },
            services::{
                grant_command_service::GrantCommandService,
                grant_query_service::GrantQueryService,
            },
        },
        interfaces::host::resources::grant_resource_data::GrantResourceData,
    },
    shared::interfaces::host::{
        diagnostics::Diagnostics,
        lifecycle::{
            CreateResourceRequest, DeleteResourceRequest, ImportResourceStateRequest,
            ReadResourceRequest, ResourceResponse, UpdateResourceRequest,
        },
        managed_resource::ManagedResource,
    },
};

/// Lifecycle adapter shared by every grant resource type.
pub struct GrantManagedResource<D> {
    command_service: Arc<dyn GrantCommandService>,
    query_service: Arc<dyn GrantQueryService>,
    data: PhantomData<fn() -> D>,
}

impl<D: GrantResourceData> GrantManagedResource<D> {
    pub fn new(
        command_service: Arc<dyn GrantCommandService>,
        query_service: Arc<dyn GrantQueryService>,
    ) -> Self {
        Self {
            command_service,
            query_service,
            data: PhantomData,
        }
    }

    fn validated(data: &D) -> Result<Grant, Diagnostics> {
        Grant::new(data.grant_parts()).map_err(to_diagnostics)
    }
}

fn to_diagnostics(error: GrantDomainError) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    match &error {
        GrantDomainError::Validation(violations) => diagnostics.add_violations(violations),
        GrantDomainError::Execution { .. } => {
            diagnostics.add_error("Grant statement failed", error.to_string())
        }
        GrantDomainError::Schema(_) => diagnostics.add_error("Query error", error.to_string()),
        GrantDomainError::UpdateNotSupported => {
            diagnostics.add_error("Update not supported", error.to_string())
        }
        GrantDomainError::InvalidImportId(_) => {
            diagnostics.add_error("Invalid import identifier", error.to_string())
        }
    }
    diagnostics
}

#[async_trait]
impl<D: GrantResourceData> ManagedResource for GrantManagedResource<D> {
    type Data = D;

    const TYPE_NAME: &'static str = D::TYPE_NAME;

    async fn create(&self, request: CreateResourceRequest<D>) -> ResourceResponse<D> {
        let grant = match Self::validated(&request.config) {
            Ok(grant) => grant,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };

        match self.command_service.handle_create(&grant).await {
            Ok(()) => ResourceResponse::with_state(request.config),
            Err(error) => ResourceResponse::failed(to_diagnostics(error)),
        }
    }

    async fn read(&self, request: ReadResourceRequest<D>) -> ResourceResponse<D> {
        let grant = match Self::validated(&request.state) {
            Ok(grant) => grant,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };

        match self.query_service.handle_read(&grant).await {
            Ok(presence) if presence.is_found() => ResourceResponse::with_state(request.state),
            Ok(_) => ResourceResponse::removed(),
            Err(error) => ResourceResponse::failed(to_diagnostics(error)),
        }
    }

    async fn update(&self, _request: UpdateResourceRequest<D>) -> ResourceResponse<D> {
        ResourceResponse::failed(to_diagnostics(GrantDomainError::UpdateNotSupported))
    }

    async fn delete(&self, request: DeleteResourceRequest<D>) -> ResourceResponse<D> {
        let grant = match Self::validated(&request.state) {
            Ok(grant) => grant,
            Err(diagnostics) => return ResourceResponse::failed(diagnostics),
        };

        match self.command_service.handle_delete(&grant).await {
            Ok(()) => ResourceResponse::removed(),
            Err(error) => ResourceResponse::failed(to_diagnostics(error)),
        }
    }

    async fn import_state(&self, request: ImportResourceStateRequest) -> ResourceResponse<D> {
        let data = match D::from_import_id(&request.id) {
            Ok(data) => data,
            Err(error) => return ResourceResponse::failed(to_diagnostics(error)),
        };

        match Self::validated(&data) {
            Ok(_) => ResourceResponse::with_state(data),
            Err(diagnostics) => ResourceResponse::failed(diagnostics),
        }
    }
}
