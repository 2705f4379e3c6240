//! This module executes a tape decider against an input string. The tape is
//! the literal input, the head starts at position 0 in the decider's start
//! state, and every step either consumes one symbol moving the head rightward
//! or reads the blank and halts with a decision. Nothing is ever written, so
//! the simulation is guaranteed to finish after `len(input) + 1` reads and the
//! trace holds exactly `len(input) + 2` snapshots.

use crate::types::{Decider, Decision, DfaError, SimulationResult, Snapshot, Step};

/// A running simulation of a [`Decider`] over one input string.
///
/// The machine owns its trace for the duration of the run and hands it back by
/// value inside the [`SimulationResult`].
pub struct Machine {
    decider: Decider,
    state: usize,
    tape: Vec<char>,
    head: usize,
    trace: Vec<Snapshot>,
}

impl Machine {
    /// Creates a machine positioned at the start of `input` and records the
    /// initial `"Start"` snapshot.
    ///
    /// # Arguments
    ///
    /// * `decider` - The decider to execute. Must come from a validated DFA.
    /// * `input` - The input string; it becomes the immutable tape.
    pub fn new(decider: Decider, input: &str) -> Self {
        let state = decider.start;
        let mut machine = Self {
            decider,
            state,
            tape: input.chars().collect(),
            head: 0,
            trace: Vec::with_capacity(input.chars().count() + 2),
        };

        machine.record("Start".to_string());
        machine
    }

    /// Executes a single step.
    ///
    /// Reads the symbol under the head, or the blank once the head has moved
    /// past the end of the input. The blank halts the machine with `Accept`
    /// iff the current state is final; any other symbol is consumed through
    /// the transition table and the head advances by one.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` if a symbol was consumed.
    /// * `Ok(Step::Halt(decision))` if the blank was read.
    /// * `Err(DfaError::UndefinedTransition)` if the table has no entry for
    ///   the current state and symbol; with a validated source DFA this
    ///   cannot happen.
    pub fn step(&mut self) -> Result<Step, DfaError> {
        let symbol = self.symbol();

        if symbol == self.decider.blank {
            let decision = if self.decider.finals.contains(&self.state) {
                Decision::Accept
            } else {
                Decision::Reject
            };

            self.record(format!("{:?}", decision));
            return Ok(Step::Halt(decision));
        }

        let next = self.lookup(symbol)?;
        let action = format!("Read '{}': {} -> {}", symbol, self.state, next);

        self.state = next;
        self.head += 1;
        self.record(action);

        Ok(Step::Continue)
    }

    /// Runs the machine to its decision.
    ///
    /// # Returns
    ///
    /// * `Ok(SimulationResult)` holding the decision and the full trace.
    /// * `Err(DfaError)` if a step faulted on a hole in the table.
    pub fn run(mut self) -> Result<SimulationResult, DfaError> {
        loop {
            if let Step::Halt(decision) = self.step()? {
                return Ok(SimulationResult {
                    decision,
                    trace: self.trace,
                });
            }
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> usize {
        self.state
    }

    /// Returns the head position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the symbol under the head, or the blank when the head has run
    /// off the end of the input.
    pub fn symbol(&self) -> char {
        self.tape
            .get(self.head)
            .copied()
            .unwrap_or(self.decider.blank)
    }

    /// Looks up the successor for the current state on `symbol`.
    fn lookup(&self, symbol: char) -> Result<usize, DfaError> {
        let rank = self
            .decider
            .alphabet
            .iter()
            .position(|&c| c == symbol)
            .ok_or(DfaError::UndefinedTransition(self.state, symbol))?;

        self.decider
            .transitions
            .get(self.state)
            .and_then(|row| row.get(rank))
            .copied()
            .ok_or(DfaError::UndefinedTransition(self.state, symbol))
    }

    /// Appends a snapshot of the current configuration to the trace.
    fn record(&mut self, action: String) {
        self.trace.push(Snapshot {
            state: self.state,
            tape: self.tape.iter().collect(),
            head: self.head,
            action,
        });
    }
}

/// Runs `decider` on `input` in one call.
///
/// # Arguments
///
/// * `decider` - The decider to execute. Must come from a validated DFA.
/// * `input` - The input string.
///
/// # Returns
///
/// * `Ok(SimulationResult)` with the decision and a trace of
///   `len(input) + 2` snapshots.
/// * `Err(DfaError::UndefinedTransition)` on a table hole.
pub fn run(decider: &Decider, input: &str) -> Result<SimulationResult, DfaError> {
    Machine::new(decider.clone(), input).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dfa;

    fn ends_with_a_decider() -> Decider {
        let dfa = Dfa {
            name: "Ends With A".to_string(),
            states: vec![0, 1],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals: vec![1],
            transitions: vec![vec![1, 0], vec![1, 0]],
        };

        Decider::from_dfa(&dfa)
    }

    #[test]
    fn test_accepting_run_and_trace_length() {
        let result = run(&ends_with_a_decider(), "abba").unwrap();

        assert_eq!(result.decision, Decision::Accept);
        // One Start snapshot, four reads, one decision.
        assert_eq!(result.trace.len(), 6);
    }

    #[test]
    fn test_trace_labels_and_configurations() {
        let result = run(&ends_with_a_decider(), "abba").unwrap();

        assert_eq!(result.trace[0].action, "Start");
        assert_eq!(result.trace[0].state, 0);
        assert_eq!(result.trace[0].head, 0);

        assert_eq!(result.trace[1].action, "Read 'a': 0 -> 1");
        assert_eq!(result.trace[1].state, 1);
        assert_eq!(result.trace[1].head, 1);

        let last = result.trace.last().unwrap();
        assert_eq!(last.action, "Accept");
        assert_eq!(last.state, 1);
        assert_eq!(last.head, 4);

        // The decider never writes.
        for snapshot in &result.trace {
            assert_eq!(snapshot.tape, "abba");
        }
    }

    #[test]
    fn test_rejecting_run() {
        let result = run(&ends_with_a_decider(), "ab").unwrap();

        assert_eq!(result.decision, Decision::Reject);
        assert_eq!(result.trace.len(), 4);
        assert_eq!(result.trace.last().unwrap().action, "Reject");
    }

    #[test]
    fn test_empty_input_decides_on_start_state() {
        let result = run(&ends_with_a_decider(), "").unwrap();

        assert_eq!(result.decision, Decision::Reject);
        assert_eq!(result.trace.len(), 2);

        // A machine whose start state is final accepts the empty string.
        let dfa = Dfa {
            name: String::new(),
            states: vec![0],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals: vec![0],
            transitions: vec![vec![0, 0]],
        };
        let result = run(&Decider::from_dfa(&dfa), "").unwrap();
        assert_eq!(result.decision, Decision::Accept);
    }

    #[test]
    fn test_step_by_step_execution() {
        let mut machine = Machine::new(ends_with_a_decider(), "ba");

        assert_eq!(machine.state(), 0);
        assert_eq!(machine.step().unwrap(), Step::Continue);
        assert_eq!(machine.state(), 0);
        assert_eq!(machine.head(), 1);

        assert_eq!(machine.step().unwrap(), Step::Continue);
        assert_eq!(machine.state(), 1);

        assert_eq!(
            machine.step().unwrap(),
            Step::Halt(Decision::Accept)
        );
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let first = run(&ends_with_a_decider(), "abba").unwrap();
        let second = run(&ends_with_a_decider(), "abba").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_symbol_outside_alphabet_faults() {
        let result = run(&ends_with_a_decider(), "axb");

        assert_eq!(result, Err(DfaError::UndefinedTransition(1, 'x')));
    }

    #[test]
    fn test_table_hole_faults() {
        // An unvalidated DFA with a truncated row faults instead of
        // misdeciding.
        let dfa = Dfa {
            name: String::new(),
            states: vec![0, 1],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals: vec![1],
            transitions: vec![vec![1, 0], vec![1]],
        };

        let result = run(&Decider::from_dfa(&dfa), "abb");
        assert_eq!(result, Err(DfaError::UndefinedTransition(1, 'b')));
    }
}
