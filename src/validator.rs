//! This module provides the structural validator for DFA records. It checks the
//! well-formedness clauses in a fixed order and stops at the first violation,
//! so a structurally invalid machine is rejected before it can reach the
//! converter or the simulator.

use crate::types::{Dfa, DfaError};

/// Represents the structural clauses a [`Dfa`] record can violate.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CheckError {
    /// The start state is not one of the machine's states.
    InvalidStartState(usize),
    /// A final state is not one of the machine's states.
    InvalidFinalState(usize),
    /// A state has no transition row at all.
    MissingTransitionRow(usize),
    /// A state's transition row has no entry for an alphabet symbol.
    MissingTransitionEntry(usize, char),
    /// A transition target is not one of the machine's states.
    InvalidTransitionTarget(usize, char, usize),
}

impl From<CheckError> for DfaError {
    /// Converts a `CheckError` into a `DfaError::ValidationError`.
    fn from(error: CheckError) -> Self {
        match error {
            CheckError::InvalidStartState(state) => {
                DfaError::ValidationError(format!("Start state {} is not a state", state))
            }
            CheckError::InvalidFinalState(state) => {
                DfaError::ValidationError(format!("Final state {} is not a state", state))
            }
            CheckError::MissingTransitionRow(state) => {
                DfaError::ValidationError(format!("State {} has no transition row", state))
            }
            CheckError::MissingTransitionEntry(state, symbol) => DfaError::ValidationError(
                format!("State {} has no transition for symbol '{}'", state, symbol),
            ),
            CheckError::InvalidTransitionTarget(state, symbol, target) => {
                DfaError::ValidationError(format!(
                    "Transition from state {} on '{}' targets {}, which is not a state",
                    state, symbol, target
                ))
            }
        }
    }
}

/// Checks a [`Dfa`] record against the well-formedness clauses, reporting the
/// first violated clause.
///
/// Clause order: the start state must be a state; every final state must be a
/// state; every state must have a transition row; every row must have an entry
/// per alphabet symbol; every transition target must be a state.
///
/// # Arguments
///
/// * `dfa` - A reference to the record to check.
///
/// # Returns
///
/// * `Ok(())` if the record is structurally well-formed.
/// * `Err(CheckError)` describing the first violated clause.
pub fn check(dfa: &Dfa) -> Result<(), CheckError> {
    check_start(dfa)?;
    check_finals(dfa)?;
    check_rows(dfa)?;
    check_entries(dfa)?;
    check_targets(dfa)?;

    Ok(())
}

/// Validates a [`Dfa`] record, collapsing the clause diagnostics to a boolean.
///
/// Pure and total: it never fails and never mutates its input, so calling it
/// repeatedly on the same record always yields the same answer. Machines
/// produced by [`crate::Enumerator`] always validate.
pub fn validate(dfa: &Dfa) -> bool {
    check(dfa).is_ok()
}

/// Checks that the start state is one of the machine's states.
fn check_start(dfa: &Dfa) -> Result<(), CheckError> {
    if !dfa.states.contains(&dfa.start) {
        return Err(CheckError::InvalidStartState(dfa.start));
    }

    Ok(())
}

/// Checks that every final state is one of the machine's states.
fn check_finals(dfa: &Dfa) -> Result<(), CheckError> {
    dfa.finals
        .iter()
        .find(|&&f| !dfa.states.contains(&f))
        .map_or(Ok(()), |&f| Err(CheckError::InvalidFinalState(f)))
}

/// Checks that every state has a transition row.
fn check_rows(dfa: &Dfa) -> Result<(), CheckError> {
    dfa.states
        .iter()
        .find(|&&s| s >= dfa.transitions.len())
        .map_or(Ok(()), |&s| Err(CheckError::MissingTransitionRow(s)))
}

/// Checks that every state's row covers every alphabet symbol.
///
/// Assumes [`check_rows`] has already passed, so each state indexes a row.
fn check_entries(dfa: &Dfa) -> Result<(), CheckError> {
    for &s in &dfa.states {
        for (k, &symbol) in dfa.alphabet.iter().enumerate() {
            if k >= dfa.transitions[s].len() {
                return Err(CheckError::MissingTransitionEntry(s, symbol));
            }
        }
    }

    Ok(())
}

/// Checks that every transition target is one of the machine's states.
fn check_targets(dfa: &Dfa) -> Result<(), CheckError> {
    for &s in &dfa.states {
        for (k, &symbol) in dfa.alphabet.iter().enumerate() {
            let target = dfa.transitions[s][k];
            if !dfa.states.contains(&target) {
                return Err(CheckError::InvalidTransitionTarget(s, symbol, target));
            }
        }
    }

    Ok(())
}
