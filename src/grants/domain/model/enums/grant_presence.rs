#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrantPresence {
    Found,
    NotFound,
}

impl GrantPresence {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}
