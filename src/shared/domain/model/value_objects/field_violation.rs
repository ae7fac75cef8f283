/// One offending attribute found while validating a request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldViolation {
    attribute: &'static str,
    summary: String,
    detail: String,
}

impl FieldViolation {
    pub fn new(
        attribute: &'static str,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
