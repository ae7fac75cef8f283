use std::collections::HashSet;

use crate::shared::domain::model::value_objects::cql::Cql;

/// Accumulates a CQL statement from escaped fragments.
///
/// The builder performs no validation; the caller owns the grammar of what it
/// assembles.
#[derive(Debug, Default)]
pub struct CqlStatementBuilder {
    statement: String,
    seen_labels: HashSet<String>,
}

impl CqlStatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragments: &[Cql]) -> &mut Self {
        for fragment in fragments {
            self.statement.push_str(fragment.as_str());
        }
        self
    }

    /// Interpolates fragments into `template`, which may only contain `%s` placeholders.
    ///
    /// Placeholders without a matching fragment are kept verbatim and surplus
    /// fragments are ignored.
    pub fn appendf(&mut self, template: &str, fragments: &[Cql]) -> &mut Self {
        let mut fragments = fragments.iter();
        let mut pieces = template.split("%s").peekable();

        while let Some(piece) = pieces.next() {
            self.statement.push_str(piece);
            if pieces.peek().is_none() {
                break;
            }
            match fragments.next() {
                Some(fragment) => self.statement.push_str(fragment.as_str()),
                None => self.statement.push_str("%s"),
            }
        }
        self
    }

    /// Appends `first` the first time `label` is used and `subsequent` afterwards.
    pub fn once(&mut self, label: &str, first: &str, subsequent: &str) -> &mut Self {
        if self.seen_labels.insert(label.to_string()) {
            self.statement.push_str(first);
        } else {
            self.statement.push_str(subsequent);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.statement
    }

    pub fn render(self) -> String {
        self.statement
    }
}
