// Hashes the fixed role credentials used to seed the school portal's
// accounts and reports one `role hash: <bcrypt>` line per role.

pub mod credentials;
pub mod error;
pub mod hasher;
pub mod reporter;

pub use credentials::{CredentialEntry, CredentialTable};
pub use error::{HashError, ReportError};
pub use hasher::{BcryptHasher, PasswordHasher, REPORT_COST};
pub use reporter::{report, HashReporter, HashResult};
