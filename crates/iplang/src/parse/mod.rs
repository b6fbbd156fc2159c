//! Recursive-descent parser over the token stream.
//!
//! The pattern, at every level: install the set of keywords valid at
//! the cursor, resolve the current token against it by unambiguous
//! prefix, advance, and recurse into the matched production. Because
//! the expectation set is recorded before every consumption attempt,
//! a failure anywhere inside the grammar can be turned into a single
//! report of what was understood, what is left, and what would have
//! been accepted.
//!
//! Productions propagate [`ParseError`] with `?` and never bounds-check
//! the stream themselves; [`parse`] is the one boundary where those
//! errors become a user-facing [`Diagnostic`].

mod address;
mod link;
mod monitor;
mod neigh;
mod route;
mod tcp_metrics;
mod tunnel;
mod xfrm;

use tracing::{debug, trace};

use crate::command::{Command, Family, ParsedInvocation};
use crate::error::{Diagnostic, Error, ParseError};
use crate::exec::Execute;
use crate::matcher::find_prefix;
use crate::stream::TokenStream;

/// Keywords accepted at the top level.
///
/// `tcp_metrics` and `tcpmetrics` are both literal candidates bound to
/// the same production; iproute2 accepts either spelling.
pub const TOP_LEVEL: &[&str] = &[
    "address",
    "route",
    "link",
    "monitor",
    "neigh",
    "tunnel",
    "tcp_metrics",
    "tcpmetrics",
    "xfrm",
];

/// Placeholder expectation for positions where the command is already
/// complete and no further token is acceptable.
const END_OF_ARGUMENTS: &str = "end of arguments";

/// Parser context threaded through every production.
///
/// Owns the stream cursor and the expectation set in effect at the
/// cursor. One instance per invocation; nothing survives it.
pub(crate) struct Parser {
    stream: TokenStream,
    expected: Vec<&'static str>,
}

impl Parser {
    fn new(tokens: Vec<String>) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            expected: Vec::new(),
        }
    }

    /// True when every token has been consumed.
    pub(crate) fn done(&self) -> bool {
        self.stream.is_done()
    }

    /// Resolve the current token against `set` and consume it.
    ///
    /// The expectation set is installed before the stream is touched,
    /// so both "ran out of arguments" and "token not understood" fail
    /// with `set` on record.
    pub(crate) fn keyword(
        &mut self,
        set: &'static [&'static str],
    ) -> Result<&'static str, ParseError> {
        self.expected = set.to_vec();
        let token = self.stream.peek()?;
        let keyword = find_prefix(token, set)?;
        trace!(token, keyword, "matched keyword");
        self.stream.advance()?;
        Ok(keyword)
    }

    /// Consume the current token as an opaque leaf value.
    ///
    /// `what` is a placeholder like `IFNAME`, shown in diagnostics when
    /// the value is missing.
    pub(crate) fn value(&mut self, what: &'static str) -> Result<String, ParseError> {
        self.expected = vec![what];
        self.stream.advance()
    }

    /// Fail on trailing tokens once a command is complete.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        if self.stream.is_done() {
            return Ok(());
        }
        self.expected = vec![END_OF_ARGUMENTS];
        Err(ParseError::NoMatch {
            token: self.stream.peek()?.to_string(),
        })
    }

    /// Snapshot the cursor context into a user-facing diagnostic.
    fn diagnostic(&self, err: &ParseError) -> Diagnostic {
        let offending = match err {
            ParseError::EndOfInput => None,
            ParseError::NoMatch { token } | ParseError::Ambiguous { token, .. } => {
                Some(token.clone())
            }
        };
        Diagnostic {
            consumed: self.stream.consumed().to_vec(),
            remaining: self.stream.remaining().to_vec(),
            offending,
            expected: self.expected.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Parse one full invocation.
///
/// This is the protective boundary: any [`ParseError`] raised inside
/// the grammar is caught here and converted into one [`Diagnostic`]
/// carrying the cursor context at the point of failure. No other error
/// path exists out of the grammar.
pub fn parse(tokens: Vec<String>, family: Family) -> Result<ParsedInvocation, Diagnostic> {
    let mut parser = Parser::new(tokens);
    match dispatch(&mut parser) {
        Ok(command) => {
            debug!(command = command.name(), "parsed");
            Ok(ParsedInvocation { family, command })
        }
        Err(err) => {
            let diag = parser.diagnostic(&err);
            debug!(%err, "parse failed");
            Err(diag)
        }
    }
}

/// Parse, then hand the command to the execution collaborator.
///
/// Execution errors surface unmodified, prefixed with the owning
/// subcommand name.
pub fn run(
    tokens: Vec<String>,
    family: Family,
    exec: &mut dyn Execute,
) -> Result<String, Error> {
    let invocation = parse(tokens, family).map_err(Error::Parse)?;
    exec.execute(&invocation).map_err(|source| Error::Execution {
        subcommand: invocation.command.name(),
        source,
    })
}

/// Top-level production: select and run one subcommand production.
fn dispatch(p: &mut Parser) -> Result<Command, ParseError> {
    let command = match p.keyword(TOP_LEVEL)? {
        "address" => Command::Address(address::parse(p)?),
        "link" => Command::Link(link::parse(p)?),
        "route" => Command::Route(route::parse(p)?),
        "neigh" => Command::Neighbor(neigh::parse(p)?),
        "monitor" => Command::Monitor(monitor::parse(p)?),
        "tunnel" => Command::Tunnel(tunnel::parse(p)?),
        "tcp_metrics" | "tcpmetrics" => Command::TcpMetrics(tcp_metrics::parse(p)?),
        "xfrm" => Command::Xfrm(xfrm::parse(p)?),
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    };
    p.expect_end()?;
    Ok(command)
}
