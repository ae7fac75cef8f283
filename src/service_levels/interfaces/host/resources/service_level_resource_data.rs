use serde::{Deserialize, Serialize};

use crate::{
    service_levels::domain::model::entities::service_level::{
        ServiceLevelAttributes, ServiceLevelParts,
    },
    shared::interfaces::host::attribute_value::AttributeValue,
};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServiceLevelResourceData {
    #[serde(default)]
    pub name: AttributeValue<String>,
    #[serde(default)]
    pub id: AttributeValue<String>,
    #[serde(default)]
    pub shares: AttributeValue<i64>,
    #[serde(default)]
    pub workload_type: AttributeValue<String>,
    #[serde(default)]
    pub timeout_milliseconds: AttributeValue<i64>,
}

impl ServiceLevelResourceData {
    pub fn service_level_parts(&self) -> ServiceLevelParts {
        ServiceLevelParts {
            name: self.name.non_empty().map(str::to_string),
            shares: self.shares.known().copied(),
            workload_type: self.workload_type.known().cloned(),
            timeout_milliseconds: self.timeout_milliseconds.known().copied(),
        }
    }

    pub fn service_level_id(&self) -> Option<&str> {
        self.id.non_empty().or_else(|| self.name.non_empty())
    }

    /// Overwrites the settings with what the server reports.
    pub fn apply(&mut self, attributes: ServiceLevelAttributes) {
        self.shares = AttributeValue::from_option(attributes.shares);
        self.workload_type = AttributeValue::from_option(attributes.workload_type);
        self.timeout_milliseconds = AttributeValue::from_option(attributes.timeout_milliseconds);
    }

    /// Settings left unknown by the plan are not sent to the server, so they end up null.
    pub fn settle_unknown(&mut self) {
        if self.shares.is_unknown() {
            self.shares = AttributeValue::Null;
        }
        if self.workload_type.is_unknown() {
            self.workload_type = AttributeValue::Null;
        }
        if self.timeout_milliseconds.is_unknown() {
            self.timeout_milliseconds = AttributeValue::Null;
        }
    }
}
