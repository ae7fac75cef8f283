use crate::shared::domain::model::value_objects::field_violation::FieldViolation;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ServiceLevelName(String);

impl ServiceLevelName {
    pub fn new(value: Option<&str>) -> Result<Self, FieldViolation> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value.to_string())),
            _ => Err(FieldViolation::new(
                "name",
                "Name missing",
                "Service level name must be specified.",
            )),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
