//! This module implements the canonical enumeration of all DFAs over a fixed
//! ordered alphabet. The enumeration is an explicit, resumable cursor rather
//! than a hidden generator: each call produces one machine and advances the
//! cursor, and every DFA with a finite state count eventually appears exactly
//! once.

use crate::types::{Dfa, DEFAULT_ALPHABET};

/// A forward-only cursor over the infinite sequence of all DFAs.
///
/// For each state count `n = 1, 2, 3, …` the transition function is encoded as
/// a vector of `n·|Σ|` digits in `0..n-1`, where the digit at position
/// `s·|Σ| + k` is the successor of state `s` on the symbol of rank `k`. Digit
/// vectors are enumerated in odometer order with position 0 as the least
/// significant digit. For each transition function all `2^n` final-state
/// subsets are emitted as bitmasks in increasing numeric order. The start
/// state is fixed at 0; machines that would differ only in their start state
/// already appear through other transition/final combinations. That gives
/// `n^(n·|Σ|) · 2^n` machines per state count.
///
/// Every produced machine is structurally valid by construction and each one
/// is a fresh value with no aliasing back into the cursor.
pub struct Enumerator {
    alphabet: Vec<char>,
    state_count: usize,
    digits: Vec<usize>,
    final_mask: u64,
}

impl Enumerator {
    /// Creates a cursor positioned at the first machine (one state, self-loop
    /// transitions, no finals).
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The ordered symbol alphabet the machines read.
    pub fn new(alphabet: Vec<char>) -> Self {
        let digits = vec![0; alphabet.len()];

        Self {
            alphabet,
            state_count: 1,
            digits,
            final_mask: 0,
        }
    }

    /// Returns the state count of the next machine the cursor will produce.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Builds the machine at the current cursor position.
    fn build(&self) -> Dfa {
        let width = self.alphabet.len();

        let transitions = (0..self.state_count)
            .map(|s| self.digits[s * width..(s + 1) * width].to_vec())
            .collect();

        let finals = (0..self.state_count)
            .filter(|&s| self.final_mask >> s & 1 == 1)
            .collect();

        Dfa {
            name: String::new(),
            states: (0..self.state_count).collect(),
            alphabet: self.alphabet.clone(),
            start: 0,
            finals,
            transitions,
        }
    }

    /// Advances the cursor by one position.
    ///
    /// The final-set mask varies fastest; when it wraps, the digit odometer is
    /// incremented from its least significant position, and when the odometer
    /// itself wraps the cursor moves on to the next state count.
    fn advance(&mut self) {
        self.final_mask += 1;
        if self.final_mask < 1 << self.state_count {
            return;
        }
        self.final_mask = 0;

        for digit in &mut self.digits {
            *digit += 1;
            if *digit < self.state_count {
                return;
            }
            *digit = 0;
        }

        // Every transition function for this state count has been emitted.
        self.state_count += 1;
        self.digits = vec![0; self.state_count * self.alphabet.len()];
    }
}

impl Default for Enumerator {
    /// Creates a cursor over the engine's default two-symbol alphabet.
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET.to_vec())
    }
}

impl Iterator for Enumerator {
    type Item = Dfa;

    /// Produces the machine at the cursor and advances. The sequence is
    /// infinite, so this never returns `None`.
    fn next(&mut self) -> Option<Dfa> {
        let dfa = self.build();
        self.advance();

        Some(dfa)
    }
}
