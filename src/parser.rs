//! This module provides the parser for `.dfa` machine descriptions, utilizing
//! the `pest` crate. It defines the grammar for `.dfa` files and functions to
//! parse the input into a [`Dfa`] record. Parsed machines are structurally
//! checked before being returned, so a successful parse always yields a
//! validated automaton.

use crate::{
    types::{Dfa, DfaError, DEFAULT_BLANK_SYMBOL},
    validator,
};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;
use std::collections::HashSet;

/// Derives a `PestParser` for the machine description grammar defined in
/// `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct DfaParser;

/// Parses the given input string into a [`Dfa`] record.
///
/// This is the main entry point for parsing machine descriptions. It trims
/// the input, parses it with the `DfaParser`, assembles the transition table,
/// and runs [`validator::check`] on the result before returning it.
///
/// # Arguments
///
/// * `input` - A string slice containing the machine description.
///
/// # Returns
///
/// * `Ok(Dfa)` if the input is successfully parsed and validated.
/// * `Err(DfaError::ParseError)` if there are any syntax errors.
/// * `Err(DfaError::ValidationError)` if the machine fails the structural
///   check.
pub fn parse(input: &str) -> Result<Dfa, DfaError> {
    let root = DfaParser::parse(Rule::file, input.trim())
        .map_err(|e| DfaError::ParseError(e.into()))? //
        .next()
        .unwrap();

    let dfa = parse_file(root)?;

    // Check the assembled machine
    validator::check(&dfa)?;

    Ok(dfa)
}

/// Parses the top-level structure of a machine description from a
/// `Pair<Rule::file>`.
///
/// This function extracts the name, alphabet, start state, final states, and
/// rule blocks. It also checks that each top-level section appears at most
/// once.
fn parse_file(pair: Pair<Rule>) -> Result<Dfa, DfaError> {
    let mut name: Option<String> = None;
    let mut alphabet: Option<Vec<char>> = None;
    let mut start: Option<usize> = None;
    let mut finals: Option<Vec<usize>> = None;
    let mut rules: Option<Pair<Rule>> = None;
    let mut seen = HashSet::new();

    // Parse top-level sections
    for p in pair.into_inner() {
        let span = p.as_span();
        let rule = p.as_rule();

        check_unique_rule(rule, span, &mut seen)?;

        match rule {
            Rule::name => name = Some(parse_inner_text(p)),
            Rule::alphabet => alphabet = Some(parse_alphabet(p)?),
            Rule::start => start = Some(parse_index(p)),
            Rule::finals => finals = Some(parse_finals(p)),
            Rule::rules => rules = Some(p),
            _ => {} // Skip other rules
        }
    }

    // Handle mandatory sections
    let name = check_required_rule(name, "name")?;
    let alphabet = check_required_rule(alphabet, "alphabet")?;
    let rules = check_required_rule(rules, "rules")?;

    let transitions = parse_table(rules, &alphabet)?;

    Ok(Dfa {
        name,
        states: (0..transitions.len()).collect(),
        alphabet,
        start: start.unwrap_or(0),
        finals: finals.unwrap_or_default(),
        transitions,
    })
}

/// Parses the alphabet section, rejecting repeated symbols.
fn parse_alphabet(pair: Pair<Rule>) -> Result<Vec<char>, DfaError> {
    let span = pair.as_span();
    let mut alphabet = Vec::new();

    for symbol_pair in pair.into_inner() {
        if symbol_pair.as_rule() == Rule::symbol {
            let symbol = parse_symbol(symbol_pair.as_str());
            if alphabet.contains(&symbol) {
                return Err(parse_error(
                    &format!("Duplicate alphabet symbol '{symbol}'"),
                    span,
                ));
            }
            alphabet.push(symbol);
        }
    }

    Ok(alphabet)
}

/// Parses the finals section into a list of state identifiers.
fn parse_finals(pair: Pair<Rule>) -> Vec<usize> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::state_id)
        .map(|p| p.as_str().parse::<usize>().unwrap_or(0))
        .collect()
}

/// Parses the rule blocks into the transition table.
///
/// Each block contributes one table row. The blocks must cover the states
/// `0..n-1` with no duplicates, and every block must define exactly one edge
/// per alphabet symbol.
fn parse_table(pair: Pair<Rule>, alphabet: &[char]) -> Result<Vec<Vec<usize>>, DfaError> {
    let section_span = pair.as_span();
    let mut blocks: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut seen_states = HashSet::new();

    for block in pair.into_inner() {
        if block.as_rule() != Rule::state_block {
            continue;
        }

        let span = block.as_span();
        let mut inner = block.into_inner();
        let state = inner.next().unwrap().as_str().parse::<usize>().unwrap_or(0);

        // Prevent duplicated rule blocks
        if !seen_states.insert(state) {
            return Err(parse_error(
                &format!("Duplicate rule block for state {state}"),
                span,
            ));
        }

        let edges = parse_edges(inner, state, alphabet)?;
        let row = assemble_row(&edges, state, alphabet, span)?;
        blocks.push((state, row));
    }

    blocks.sort_by_key(|(state, _)| *state);

    // Blocks must name the states 0..n-1 so the table indexes by identifier.
    for (expected, (state, _)) in blocks.iter().enumerate() {
        if *state != expected {
            return Err(parse_error(
                &format!(
                    "Rule blocks must cover states 0..{} contiguously, found state {}",
                    blocks.len() - 1,
                    state
                ),
                section_span,
            ));
        }
    }

    Ok(blocks.into_iter().map(|(_, row)| row).collect())
}

/// Parses the edges of one rule block, rejecting unknown and repeated symbols.
fn parse_edges(
    pairs: pest::iterators::Pairs<Rule>,
    state: usize,
    alphabet: &[char],
) -> Result<Vec<(char, usize)>, DfaError> {
    let mut edges: Vec<(char, usize)> = Vec::new();

    for p in pairs {
        if p.as_rule() != Rule::edge {
            continue;
        }

        let span = p.as_span();
        let mut inner = p.into_inner();
        let symbol = parse_symbol(inner.next().unwrap().as_str());
        let target = inner.next().unwrap().as_str().parse::<usize>().unwrap_or(0);

        if !alphabet.contains(&symbol) {
            return Err(parse_error(
                &format!("Symbol '{symbol}' is not in the alphabet"),
                span,
            ));
        }

        if edges.iter().any(|&(s, _)| s == symbol) {
            return Err(parse_error(
                &format!("Duplicate transition for state {state} on '{symbol}'"),
                span,
            ));
        }

        edges.push((symbol, target));
    }

    Ok(edges)
}

/// Orders a block's edges by symbol rank into a table row, requiring an edge
/// for every alphabet symbol.
fn assemble_row(
    edges: &[(char, usize)],
    state: usize,
    alphabet: &[char],
    span: Span,
) -> Result<Vec<usize>, DfaError> {
    alphabet
        .iter()
        .map(|&symbol| {
            edges
                .iter()
                .find(|&&(s, _)| s == symbol)
                .map(|&(_, target)| target)
                .ok_or_else(|| {
                    parse_error(
                        &format!("State {state} has no transition for symbol '{symbol}'"),
                        span,
                    )
                })
        })
        .collect()
}

/// Creates a `DfaError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> DfaError {
    DfaError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

/// Parses a single character symbol from a string.
fn parse_symbol(input: &str) -> char {
    input.chars().next().unwrap_or(DEFAULT_BLANK_SYMBOL)
}

/// Parses a section holding a single state identifier.
fn parse_index(pair: Pair<Rule>) -> usize {
    pair.into_inner()
        .next()
        .map(|p| p.as_str().parse::<usize>().unwrap_or(0))
        .unwrap_or(0)
}

/// Extracts the trimmed inner text of a section.
fn parse_inner_text(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .next()
        .map(|p| p.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Checks if a given section has already been declared, ensuring uniqueness
/// for top-level sections.
fn check_unique_rule(rule: Rule, span: Span, seen: &mut HashSet<Rule>) -> Result<(), DfaError> {
    if !matches!(
        rule,
        Rule::name | Rule::alphabet | Rule::start | Rule::finals | Rule::rules
    ) {
        return Ok(());
    };

    if seen.contains(&rule) {
        return Err(parse_error(
            &format!("Duplicate \"{rule:?}:\" declaration"),
            span,
        ));
    }

    seen.insert(rule);

    Ok(())
}

/// Checks if a required section is present, returning an `Err` if it's missing.
fn check_required_rule<T>(value: Option<T>, section: &str) -> Result<T, DfaError> {
    value.ok_or_else(|| DfaError::ValidationError(format!("Missing '{section}' section")))
}
