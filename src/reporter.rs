use std::collections::VecDeque;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use crate::credentials::{CredentialEntry, CredentialTable};
use crate::error::{HashError, ReportError};
use crate::hasher::PasswordHasher;

// One report line, dropped once printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    pub role: &'static str,
    pub hash: String,
}

impl fmt::Display for HashResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hash: {}", self.role, self.hash)
    }
}

fn hash_with<H: PasswordHasher + ?Sized>(
    hasher: &H,
    entry: CredentialEntry,
) -> Result<HashResult, ReportError> {
    let hash = hasher
        .hash_password(entry.plaintext)
        .map_err(|source| ReportError::HashingFailure {
            role: entry.role,
            source,
        })?;
    tracing::debug!(role = entry.role, "hashed credential");
    Ok(HashResult {
        role: entry.role,
        hash,
    })
}

pub struct HashReporter<H> {
    hasher: Arc<H>,
}

impl<H> Clone for HashReporter<H> {
    fn clone(&self) -> Self {
        HashReporter {
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<H: PasswordHasher + 'static> HashReporter<H> {
    pub fn new(hasher: H) -> Self {
        HashReporter {
            hasher: Arc::new(hasher),
        }
    }

    pub fn hash_entry(&self, entry: &CredentialEntry) -> Result<HashResult, ReportError> {
        hash_with(&*self.hasher, *entry)
    }

    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        self.hasher.verify_password(plaintext, hash)
    }

    // Hash and print one entry at a time; the first failure ends the run
    pub fn run<W: Write>(
        &self,
        table: &CredentialTable,
        out: &mut W,
    ) -> Result<usize, ReportError> {
        tracing::info!(entries = table.len(), "hashing credentials");

        let mut written = 0;
        for entry in table {
            let result = self.hash_entry(entry)?;
            writeln!(out, "{result}")?;
            written += 1;
        }
        out.flush()?;

        tracing::info!(written, "hash report complete");
        Ok(written)
    }

    // Hash all entries on the blocking pool, print in table order.
    // A bcrypt call already running can't be aborted; its result is dropped.
    pub async fn run_overlapped<W: Write>(
        &self,
        table: &CredentialTable,
        out: &mut W,
    ) -> Result<usize, ReportError> {
        tracing::info!(entries = table.len(), "hashing credentials (overlapped)");

        let mut pending: VecDeque<_> = table
            .iter()
            .copied()
            .map(|entry| {
                let hasher = Arc::clone(&self.hasher);
                tokio::task::spawn_blocking(move || hash_with(&*hasher, entry))
            })
            .collect();

        let mut written = 0;
        while let Some(handle) = pending.pop_front() {
            let step = match handle.await {
                Ok(outcome) => outcome,
                Err(join_err) => Err(ReportError::Task(join_err)),
            }
            .and_then(|result| {
                writeln!(out, "{result}")?;
                Ok(())
            });

            if let Err(err) = step {
                for rest in &pending {
                    rest.abort();
                }
                return Err(err);
            }
            written += 1;
        }
        out.flush()?;

        tracing::info!(written, "hash report complete");
        Ok(written)
    }
}

// What the binary runs: the built-in table, sequentially, into `out`
pub fn report<H: PasswordHasher + 'static, W: Write>(
    reporter: &HashReporter<H>,
    out: &mut W,
) -> anyhow::Result<usize> {
    reporter
        .run(&CredentialTable::builtin(), out)
        .context("hash report aborted")
}
