//! This crate provides an algorithmic engine for deterministic finite automata
//! over a fixed ordered alphabet. It includes modules for canonically
//! enumerating every DFA, validating the structure of an arbitrary DFA record,
//! converting a validated DFA into a one-directional tape decider, simulating
//! that decider over an input string with a full step trace, and deciding
//! language emptiness by reachability.

pub mod catalog;
pub mod decider;
pub mod emptiness;
pub mod enumerator;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod types;
pub mod validator;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `Catalog` struct and `MACHINES` registry from the catalog module.
pub use catalog::{Catalog, MACHINES};
/// Re-exports the emptiness decision from the emptiness module.
pub use emptiness::is_empty;
/// Re-exports the `Enumerator` cursor from the enumerator module.
pub use enumerator::Enumerator;
/// Re-exports the `DescriptionLoader` struct from the loader module.
pub use loader::DescriptionLoader;
/// Re-exports the `Machine` simulator and the one-call `run` function.
pub use machine::{run, Machine};
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the structural checks from the validator module.
pub use validator::{check, validate, CheckError};
/// Re-exports the core data types and the error enum from the types module.
pub use types::{
    Decider, Decision, Dfa, DfaError, SimulationResult, Snapshot, Step, DEFAULT_ALPHABET,
    DEFAULT_BLANK_SYMBOL,
};
