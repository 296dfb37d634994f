use std::fmt::{Display, Formatter, Result as FmtResult};

/// Storage backend types
///
/// Each upload route binds to exactly one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Disk,
    Memory,
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::Disk => write!(f, "disk"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}
