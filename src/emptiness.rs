//! This module decides language emptiness for a DFA by breadth-first
//! reachability over the transition graph: the recognized language is empty
//! iff no accepting state can be reached from the start state.

use crate::types::Dfa;
use std::collections::VecDeque;

/// Returns whether `dfa` recognizes the empty language.
///
/// **Precondition**: `dfa` must satisfy [`crate::validator::validate`]; the
/// traversal indexes the transition table directly.
///
/// The search short-circuits on the first accepting state it dequeues, so a
/// machine whose start state accepts is answered without touching the rest of
/// the graph. Each state is visited at most once; total work is
/// `O(|states| · |alphabet|)`.
///
/// # Arguments
///
/// * `dfa` - The validated automaton to check.
pub fn is_empty(dfa: &Dfa) -> bool {
    search(dfa).0
}

/// Breadth-first search from the start state. Returns whether no accepting
/// state was reached, together with the number of states dequeued before the
/// answer was known.
fn search(dfa: &Dfa) -> (bool, usize) {
    let mut visited = vec![false; dfa.states.len()];
    let mut queue = VecDeque::new();

    // States are marked visited on enqueue so no state is queued twice.
    visited[dfa.start] = true;
    queue.push_back(dfa.start);

    let mut dequeued = 0;
    while let Some(state) = queue.pop_front() {
        dequeued += 1;

        if dfa.finals.contains(&state) {
            return (false, dequeued);
        }

        for &target in &dfa.transitions[state] {
            if !visited[target] {
                visited[target] = true;
                queue.push_back(target);
            }
        }
    }

    (true, dequeued)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_dfa(finals: Vec<usize>) -> Dfa {
        // 0 -> 1 -> 2 on 'a'; 'b' loops in place.
        Dfa {
            name: String::new(),
            states: vec![0, 1, 2],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals,
            transitions: vec![vec![1, 0], vec![2, 1], vec![2, 2]],
        }
    }

    #[test]
    fn test_no_finals_is_empty() {
        assert!(is_empty(&chain_dfa(vec![])));
    }

    #[test]
    fn test_reachable_final_is_nonempty() {
        assert!(!is_empty(&chain_dfa(vec![1])));
        assert!(!is_empty(&chain_dfa(vec![2])));
    }

    #[test]
    fn test_unreachable_final_is_empty() {
        // State 2 is final but nothing leads to it.
        let dfa = Dfa {
            name: String::new(),
            states: vec![0, 1, 2],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals: vec![2],
            transitions: vec![vec![1, 0], vec![0, 1], vec![2, 2]],
        };

        assert!(is_empty(&dfa));
    }

    #[test]
    fn test_short_circuits_on_first_final() {
        // The start state accepts; the rest of the chain must never be
        // dequeued.
        let (empty, dequeued) = search(&chain_dfa(vec![0]));
        assert!(!empty);
        assert_eq!(dequeued, 1);

        // A final mid-chain stops the search before the tail.
        let (empty, dequeued) = search(&chain_dfa(vec![1]));
        assert!(!empty);
        assert_eq!(dequeued, 2);
    }

    #[test]
    fn test_exhausts_graph_when_empty() {
        let (empty, dequeued) = search(&chain_dfa(vec![]));
        assert!(empty);
        assert_eq!(dequeued, 3);
    }

    #[test]
    fn test_cyclic_graph_terminates() {
        // 0 <-> 1 on 'a', self-loops on 'b'.
        let dfa = Dfa {
            name: String::new(),
            states: vec![0, 1],
            alphabet: vec!['a', 'b'],
            start: 0,
            finals: vec![],
            transitions: vec![vec![1, 0], vec![0, 1]],
        };

        let (empty, dequeued) = search(&dfa);
        assert!(empty);
        assert_eq!(dequeued, 2);
    }
}
