use crate::error::HashError;

// Cost factor for every reported hash (2^10 rounds)
pub const REPORT_COST: u32 = 10;

pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, plaintext: &str) -> Result<String, HashError>;
    fn verify_password(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    // Any cost outside 4..=31 makes every hash call fail.
    pub fn with_cost(cost: u32) -> Self {
        BcryptHasher { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::with_cost(REPORT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    // A fresh random salt is drawn on every call
    fn hash_password(&self, plaintext: &str) -> Result<String, HashError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    fn verify_password(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        Ok(bcrypt::verify(plaintext, hash)?)
    }
}
