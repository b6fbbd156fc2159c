//! Unambiguous-prefix keyword matching.

use crate::error::ParseError;

/// Resolve `token` against `candidates`, allowing abbreviation.
///
/// Rules, in order:
///
/// 1. An exact match always wins, even if the token is also a prefix
///    of another candidate (`link` matches `link` even with a
///    hypothetical `linkdown` in the set).
/// 2. Otherwise a non-empty token that is a prefix of exactly one
///    candidate matches that candidate.
/// 3. A prefix of two or more candidates is [`ParseError::Ambiguous`];
///    a prefix of none is [`ParseError::NoMatch`].
///
/// Matching is case-sensitive and byte-wise. This is what makes `a`
/// mean `address` and `l` mean `link` without any per-keyword alias
/// lists.
pub fn find_prefix<'a>(token: &str, candidates: &[&'a str]) -> Result<&'a str, ParseError> {
    if let Some(exact) = candidates.iter().find(|c| **c == token) {
        return Ok(exact);
    }
    if token.is_empty() {
        return Err(ParseError::NoMatch {
            token: String::new(),
        });
    }

    let hits: Vec<&'a str> = candidates
        .iter()
        .copied()
        .filter(|c| c.starts_with(token))
        .collect();
    match hits.as_slice() {
        [only] => Ok(only),
        [] => Err(ParseError::NoMatch {
            token: token.to_string(),
        }),
        _ => Err(ParseError::Ambiguous {
            token: token.to_string(),
            candidates: hits.iter().map(|c| c.to_string()).collect(),
        }),
    }
}
