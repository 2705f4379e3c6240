//! This module defines the core data structures and types used throughout the DFA
//! engine, including the automaton record, the derived tape decider, simulation
//! results, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rule;

/// The preferred blank symbol attached to a decider when it is not already an
/// alphabet symbol.
pub const DEFAULT_BLANK_SYMBOL: char = '_';
/// The default alphabet used by the demonstration machines and the enumerator
/// convenience constructor.
pub const DEFAULT_ALPHABET: [char; 2] = ['a', 'b'];

/// A deterministic finite automaton over an ordered symbol alphabet.
///
/// States are the integers `0..n-1`. The transition table is indexed first by
/// the state identifier and then by the rank of the symbol in `alphabet`, so
/// `transitions[s][k]` is the successor of state `s` on symbol `alphabet[k]`.
///
/// A `Dfa` value is plain data and carries no well-formedness guarantee of its
/// own; [`crate::validator::validate`] decides whether the record is
/// structurally sound. Machines produced by [`crate::Enumerator`] are always
/// sound by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dfa {
    /// Display name of the machine. Empty for enumerated machines; the
    /// algorithms never read it.
    pub name: String,
    /// The state identifiers, `0..n-1` in order.
    pub states: Vec<usize>,
    /// The ordered input alphabet.
    pub alphabet: Vec<char>,
    /// The start state.
    pub start: usize,
    /// The accepting states.
    pub finals: Vec<usize>,
    /// The transition table, one row per state, one column per symbol rank.
    pub transitions: Vec<Vec<usize>>,
}

impl Dfa {
    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns whether `state` is accepting.
    pub fn is_final(&self, state: usize) -> bool {
        self.finals.contains(&state)
    }

    /// Returns the rank of `symbol` in the alphabet, if it is an alphabet
    /// symbol at all.
    pub fn symbol_rank(&self, symbol: char) -> Option<usize> {
        self.alphabet.iter().position(|&c| c == symbol)
    }
}

/// A one-directional tape-reading decider derived from a validated [`Dfa`].
///
/// The decider shares the automaton's shape and additionally fixes a `blank`
/// symbol disjoint from the alphabet. It never writes to its tape and its head
/// only moves rightward, so it is a restricted Turing-machine view of the DFA
/// rather than a general machine. Created once per conversion, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decider {
    /// The state identifiers, `0..n-1` in order.
    pub states: Vec<usize>,
    /// The ordered input alphabet.
    pub alphabet: Vec<char>,
    /// The start state.
    pub start: usize,
    /// The accepting states.
    pub finals: Vec<usize>,
    /// The transition table, identical in shape to the source DFA's.
    pub transitions: Vec<Vec<usize>>,
    /// The blank symbol read once the head runs off the input. Guaranteed not
    /// to be an alphabet symbol.
    pub blank: char,
}

/// The verdict of a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The decider halted in an accepting state.
    Accept,
    /// The decider halted in a non-accepting state.
    Reject,
}

/// One configuration snapshot in a simulation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The current state.
    pub state: usize,
    /// The full tape content. The decider never writes, so this is always the
    /// original input string.
    pub tape: String,
    /// The head position as an index into the tape.
    pub head: usize,
    /// A textual label: `"Start"`, a read/transition description, or the
    /// terminal decision.
    pub action: String,
}

/// The outcome of a complete simulation: the decision plus the fully
/// materialized trace, `len(input) + 2` snapshots long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Accept or reject.
    pub decision: Decision,
    /// One `"Start"` snapshot, one snapshot per consumed input symbol, and
    /// one terminal decision snapshot, in order.
    pub trace: Vec<Snapshot>,
}

/// Represents the outcome of a single simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The decider consumed a symbol and continues.
    Continue,
    /// The decider read the blank and halted with a decision.
    Halt(Decision),
}

/// Represents various errors that can occur during DFA engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DfaError {
    /// The simulator's transition table had no entry for the current state
    /// and symbol. This is the fault raised when a structurally invalid DFA
    /// bypasses validation on its way into a decider.
    #[error("No transition defined for state {0} on symbol '{1}'")]
    UndefinedTransition(usize, char),
    /// Indicates an error during the parsing of a machine description.
    #[error("Description parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates an error during structural checking of a machine description.
    #[error("Description validation error: {0}")]
    ValidationError(String),
    /// Indicates an error related to file system operations.
    #[error("File error: {0}")]
    FileError(String),
}
