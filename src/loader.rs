//! This module provides the `DescriptionLoader` struct, responsible for loading
//! machine descriptions from various sources, including files and strings.

use crate::parser::parse;
use crate::types::{Dfa, DfaError};
use std::fs;
use std::path::{Path, PathBuf};

/// `DescriptionLoader` is a utility struct for loading `.dfa` machine
/// descriptions. It provides methods to load a description from an individual
/// file, from string content, and to discover and load all `.dfa` files within
/// a specified directory.
pub struct DescriptionLoader;

impl DescriptionLoader {
    /// Loads a single machine description from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the `.dfa` file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(Dfa)` if the file is successfully read and parsed.
    /// * `Err(DfaError::FileError)` if the file cannot be read.
    /// * `Err(DfaError::ParseError)` or `Err(DfaError::ValidationError)` if
    ///   the file content is not a valid description.
    pub fn load_description(path: &Path) -> Result<Dfa, DfaError> {
        let content = fs::read_to_string(path).map_err(|e| {
            DfaError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads a single machine description from the provided string content.
    ///
    /// This is useful for parsing descriptions that are not stored in files,
    /// e.g., from user input.
    ///
    /// # Arguments
    ///
    /// * `content` - A string slice containing the machine description.
    ///
    /// # Returns
    ///
    /// * `Ok(Dfa)` if the content is successfully parsed.
    /// * `Err(DfaError)` if the content is not a valid description.
    pub fn load_description_from_string(content: &str) -> Result<Dfa, DfaError> {
        parse(content)
    }

    /// Loads all machine description files (`.dfa` extension) from a given
    /// directory.
    ///
    /// It iterates through the directory, attempts to load each `.dfa` file,
    /// and collects the results. Directories and non-`.dfa` files are skipped.
    ///
    /// # Arguments
    ///
    /// * `directory` - A reference to the `Path` of the directory to scan.
    ///
    /// # Returns
    ///
    /// * `Vec<Result<(PathBuf, Dfa), DfaError>>` - One entry per `.dfa` file,
    ///   holding either the path and parsed machine or the error that loading
    ///   it produced.
    pub fn load_descriptions(directory: &Path) -> Vec<Result<(PathBuf, Dfa), DfaError>> {
        if !directory.exists() {
            return vec![Err(DfaError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(DfaError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err(DfaError::FileError(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                let path = entry.path();

                // Skip directories and non-.dfa files
                if path.is_dir() || path.extension().is_none_or(|ext| ext != "dfa") {
                    return None;
                }

                match Self::load_description(&path) {
                    Ok(dfa) => Some(Ok((path, dfa))),
                    Err(e) => Some(Err(DfaError::FileError(format!(
                        "Failed to load description from {}: {}",
                        path.display(),
                        e
                    )))),
                }
            })
            .collect()
    }
}
