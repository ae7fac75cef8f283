use serde::{Deserialize, Serialize};

use super::diagnostics::Diagnostics;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateResourceRequest<D> {
    pub config: D,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReadResourceRequest<D> {
    pub state: D,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateResourceRequest<D> {
    pub plan: D,
    pub state: D,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteResourceRequest<D> {
    pub state: D,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImportResourceStateRequest {
    pub id: String,
}

/// Outcome of any lifecycle operation.
///
/// `state: None` after a read means the object is gone upstream and must be
/// dropped from tracked state. After a delete it is always `None`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResourceResponse<D> {
    pub state: Option<D>,
    pub diagnostics: Diagnostics,
}

impl<D> ResourceResponse<D> {
    pub fn with_state(state: D) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn removed() -> Self {
        Self {
            state: None,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }
}
