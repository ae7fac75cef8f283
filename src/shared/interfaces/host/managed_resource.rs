use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use super::lifecycle::{
    CreateResourceRequest, DeleteResourceRequest, ImportResourceStateRequest,
    ReadResourceRequest, ResourceResponse, UpdateResourceRequest,
};

/// A resource type driven by the declarative lifecycle host.
///
/// Failures never escape as errors; they are reported through the response
/// diagnostics.
#[async_trait]
pub trait ManagedResource: Send + Sync + 'static {
    type Data: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    const TYPE_NAME: &'static str;

    async fn create(
        &self,
        request: CreateResourceRequest<Self::Data>,
    ) -> ResourceResponse<Self::Data>;

    async fn read(&self, request: ReadResourceRequest<Self::Data>)
    -> ResourceResponse<Self::Data>;

    async fn update(
        &self,
        request: UpdateResourceRequest<Self::Data>,
    ) -> ResourceResponse<Self::Data>;

    async fn delete(
        &self,
        request: DeleteResourceRequest<Self::Data>,
    ) -> ResourceResponse<Self::Data>;

    async fn import_state(
        &self,
        request: ImportResourceStateRequest,
    ) -> ResourceResponse<Self::Data>;
}
