// Seed credentials for the portal's built-in roles.
//
// These plaintexts are fixtures for local setups and tests. Never reuse them
// as real account passwords.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialEntry {
    pub role: &'static str,
    pub plaintext: &'static str,
}

impl CredentialEntry {
    pub const fn new(role: &'static str, plaintext: &'static str) -> Self {
        CredentialEntry { role, plaintext }
    }
}

const BUILTIN: [CredentialEntry; 3] = [
    CredentialEntry::new("teacher", "Teacher123!"),
    CredentialEntry::new("student", "Student123!"),
    CredentialEntry::new("parent", "Parent123!"),
];

// Read-only; iteration order is report order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialTable {
    entries: Vec<CredentialEntry>,
}

impl CredentialTable {
    pub fn new(entries: impl IntoIterator<Item = CredentialEntry>) -> Self {
        CredentialTable {
            entries: entries.into_iter().collect(),
        }
    }

    // teacher, student, parent
    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CredentialEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn plaintext_for(&self, role: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.plaintext)
    }
}

impl<'a> IntoIterator for &'a CredentialTable {
    type Item = &'a CredentialEntry;
    type IntoIter = std::slice::Iter<'a, CredentialEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
