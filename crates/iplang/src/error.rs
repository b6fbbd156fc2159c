//! Error types for parsing and execution.

use std::fmt;

/// Result type for interpreter operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised inside grammar productions.
///
/// These never reach the user directly: the outer parse boundary
/// converts them into a [`Diagnostic`] carrying the full cursor
/// context. Productions are free to propagate them with `?` and skip
/// manual bounds checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token stream was exhausted mid-production.
    #[error("ran out of arguments")]
    EndOfInput,

    /// The current token matched none of the expected keywords.
    #[error("unknown token {token:?}")]
    NoMatch {
        /// The token that failed to match.
        token: String,
    },

    /// The current token is a prefix of two or more expected keywords.
    ///
    /// Reported to the user like [`ParseError::NoMatch`], but detected
    /// explicitly so an arbitrary candidate is never picked silently.
    #[error("ambiguous token {token:?}")]
    Ambiguous {
        /// The token that matched more than one candidate.
        token: String,
        /// The candidates it is a prefix of.
        candidates: Vec<String>,
    },
}

/// Structured parse-failure report surfaced to the user.
///
/// Tells the user exactly what was understood, where the parse
/// stopped, and what would have been accepted there, instead of
/// dumping the whole grammar at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Tokens consumed before the failure.
    pub consumed: Vec<String>,
    /// Tokens left unconsumed, starting at the offending token.
    pub remaining: Vec<String>,
    /// The token that stopped the parse; `None` when input ran out.
    pub offending: Option<String>,
    /// Keywords (or value placeholders) acceptable at the failure point.
    pub expected: Vec<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.offending {
            Some(tok) => write!(
                f,
                "this was fine: '{}', and this was left, '{}', and this was not understood, '{}'; only options are '{}'",
                self.consumed.join(" "),
                self.remaining.join(" "),
                tok,
                self.expected.join(" "),
            ),
            None if self.consumed.is_empty() => write!(
                f,
                "ran out of arguments, expected one of '{}'",
                self.expected.join(" "),
            ),
            None => write!(
                f,
                "ran out of arguments after '{}', expected one of '{}'",
                self.consumed.join(" "),
                self.expected.join(" "),
            ),
        }
    }
}

impl std::error::Error for Diagnostic {}

/// Error from an [`Execute`](crate::exec::Execute) implementation.
///
/// The interpreter never inspects these; they pass through unmodified
/// with the owning subcommand name prefixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExecError {
    /// Human-readable failure description.
    pub message: String,
}

impl ExecError {
    /// Create an execution error from any displayable value.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Top-level error for one interpreter invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The token sequence did not form a valid command.
    #[error("{0}")]
    Parse(Diagnostic),

    /// The command parsed but its execution failed.
    #[error("{subcommand}: {source}")]
    Execution {
        /// Canonical name of the subcommand that was executing.
        subcommand: &'static str,
        /// The collaborator's error, unmodified.
        source: ExecError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_with_offending_token() {
        let diag = Diagnostic {
            consumed: vec!["link".into()],
            remaining: vec!["xyz".into()],
            offending: Some("xyz".into()),
            expected: vec!["show".into(), "set".into()],
        };
        let text = diag.to_string();
        assert!(text.contains("this was fine: 'link'"));
        assert!(text.contains("'xyz'"));
        assert!(text.contains("only options are 'show set'"));
    }

    #[test]
    fn test_diagnostic_display_end_of_input() {
        let diag = Diagnostic {
            consumed: vec!["address".into(), "add".into()],
            remaining: vec![],
            offending: None,
            expected: vec!["ADDRESS/PREFIXLEN".into()],
        };
        let text = diag.to_string();
        assert!(text.contains("ran out of arguments after 'address add'"));
        assert!(text.contains("ADDRESS/PREFIXLEN"));
    }

    #[test]
    fn test_diagnostic_display_empty_input() {
        let diag = Diagnostic {
            consumed: vec![],
            remaining: vec![],
            offending: None,
            expected: vec!["address".into(), "link".into()],
        };
        assert!(
            diag.to_string()
                .starts_with("ran out of arguments, expected one of")
        );
    }

    #[test]
    fn test_execution_error_prefixes_subcommand() {
        let err = Error::Execution {
            subcommand: "route",
            source: ExecError::new("no such table"),
        };
        assert_eq!(err.to_string(), "route: no such table");
    }
}
