use crate::shared::domain::model::value_objects::field_violation::FieldViolation;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(value: Option<&str>) -> Result<Self, FieldViolation> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value.to_string())),
            _ => Err(FieldViolation::new(
                "name",
                "Name missing",
                "Role name must be specified.",
            )),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
