use thiserror::Error;

const MISSING_OBJECT_MARKER: &str = "doesn't exist";

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StatementExecutionError {
    #[error("unable to connect: {0}")]
    Connection(String),

    #[error("{0}")]
    Request(String),

    #[error("unable to decode result: {0}")]
    Decode(String),
}

impl StatementExecutionError {
    /// Whether the server rejected the statement because a named object (role,
    /// keyspace, table) is gone.
    ///
    /// The server reports this only through message text.
    // TODO: switch to the protocol error code once the driver surfaces a distinct one for missing roles.
    pub fn indicates_missing_object(&self) -> bool {
        match self {
            Self::Request(message) => message.contains(MISSING_OBJECT_MARKER),
            Self::Connection(_) | Self::Decode(_) => false,
        }
    }
}
