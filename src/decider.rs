//! This module lifts a validated DFA into a one-directional tape decider. The
//! conversion copies the automaton's shape verbatim and attaches a blank
//! symbol that is guaranteed not to be an alphabet symbol.

use crate::types::{Dfa, Decider, DEFAULT_BLANK_SYMBOL};

impl Decider {
    /// Converts a DFA into its decider view.
    ///
    /// **Precondition**: `dfa` must satisfy [`crate::validator::validate`].
    /// No validation happens here; converting an ill-formed record produces a
    /// decider whose simulation faults with
    /// [`crate::types::DfaError::UndefinedTransition`].
    ///
    /// # Arguments
    ///
    /// * `dfa` - The validated automaton to convert.
    pub fn from_dfa(dfa: &Dfa) -> Self {
        Self {
            states: dfa.states.clone(),
            alphabet: dfa.alphabet.clone(),
            start: dfa.start,
            finals: dfa.finals.clone(),
            transitions: dfa.transitions.clone(),
            blank: pick_blank(&dfa.alphabet),
        }
    }
}

/// Picks a blank symbol disjoint from the alphabet: the default blank when
/// available, otherwise the first printable character not in the alphabet.
///
/// The fallback chain always yields for a finite alphabet.
fn pick_blank(alphabet: &[char]) -> char {
    std::iter::once(DEFAULT_BLANK_SYMBOL)
        .chain((0x21..=0x10FFFF).filter_map(char::from_u32))
        .find(|c| !alphabet.contains(c))
        .unwrap_or(DEFAULT_BLANK_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends_with_a() -> Dfa {
        Dfa {
            name: "Ends With A".to_string(),
            states: vec![0, 1],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals: vec![1],
            transitions: vec![vec![1, 0], vec![1, 0]],
        }
    }

    #[test]
    fn test_conversion_copies_shape() {
        let dfa = ends_with_a();
        let decider = Decider::from_dfa(&dfa);

        assert_eq!(decider.states, dfa.states);
        assert_eq!(decider.alphabet, dfa.alphabet);
        assert_eq!(decider.start, dfa.start);
        assert_eq!(decider.finals, dfa.finals);
        assert_eq!(decider.transitions, dfa.transitions);
    }

    #[test]
    fn test_blank_defaults_to_underscore() {
        let decider = Decider::from_dfa(&ends_with_a());
        assert_eq!(decider.blank, DEFAULT_BLANK_SYMBOL);
    }

    #[test]
    fn test_blank_is_disjoint_when_default_is_taken() {
        let mut dfa = ends_with_a();
        dfa.alphabet = vec!['_', 'b'];
        dfa.transitions = vec![vec![1, 0], vec![1, 0]];

        let decider = Decider::from_dfa(&dfa);
        assert!(!decider.alphabet.contains(&decider.blank));
    }

    #[test]
    fn test_blank_is_disjoint_for_hostile_alphabet() {
        // Alphabet covering the default blank and the first printable
        // fallbacks.
        let mut dfa = ends_with_a();
        dfa.alphabet = vec!['_', '!'];

        let decider = Decider::from_dfa(&dfa);
        assert!(!decider.alphabet.contains(&decider.blank));
        assert_eq!(decider.blank, '"');
    }
}
