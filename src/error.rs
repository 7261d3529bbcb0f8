use thiserror::Error;

#[derive(Debug, Error)]
#[error("bcrypt primitive failed")]
pub struct HashError(#[from] pub bcrypt::BcryptError);

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to hash password for role `{role}`")]
    HashingFailure {
        role: &'static str,
        #[source]
        source: HashError,
    },

    #[error("failed to write report line")]
    Output(#[from] std::io::Error),

    #[error("hashing task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

impl ReportError {
    pub fn role(&self) -> Option<&'static str> {
        match self {
            ReportError::HashingFailure { role, .. } => Some(*role),
            _ => None,
        }
    }
}
