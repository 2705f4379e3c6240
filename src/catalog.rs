use crate::types::{Dfa, DfaError};

use std::sync::RwLock;

// Default embedded machines
const MACHINE_TEXTS: [&str; 4] = [
    include_str!("../machines/ends-with-a.dfa"),
    include_str!("../machines/even-bs.dfa"),
    include_str!("../machines/empty-language.dfa"),
    include_str!("../machines/unreachable-accept.dfa"),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<Dfa>> = RwLock::new(Vec::new());
}

pub struct Catalog;

impl Catalog {
    /// Initialize the catalog with the embedded machine descriptions
    pub fn load() -> Result<(), DfaError> {
        let mut machines = Vec::new();

        for text in MACHINE_TEXTS {
            machines.push(crate::parser::parse(text)?);
        }

        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(DfaError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of available machines
    pub fn count() -> usize {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// Get a machine by its index
    pub fn get(index: usize) -> Result<Dfa, DfaError> {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| DfaError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .cloned()
            .ok_or_else(|| {
                DfaError::ValidationError(format!("Machine index {} out of range", index))
            })
    }

    /// Get a machine by its name
    pub fn get_by_name(name: &str) -> Result<Dfa, DfaError> {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| DfaError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|dfa| dfa.name == name)
            .cloned()
            .ok_or_else(|| DfaError::ValidationError(format!("Machine '{}' not found", name)))
    }

    /// List all machine names
    pub fn names() -> Vec<String> {
        // Initialize with the embedded machines if not already initialized
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| machines.iter().map(|dfa| dfa.name.clone()).collect())
            .unwrap_or_else(|_| Vec::new())
    }

    /// Get the original text of a machine description by its index
    pub fn text(index: usize) -> Result<&'static str, DfaError> {
        MACHINE_TEXTS.get(index).copied().ok_or_else(|| {
            DfaError::ValidationError(format!("Machine text index {} out of range", index))
        })
    }
}
