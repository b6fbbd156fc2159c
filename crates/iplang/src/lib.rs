//! Single-pass interpreter for the shorthand `ip` command language.
//!
//! The `ip` tool accepts a compact grammar with lots of convenience
//! shortcuts: any keyword may be abbreviated to an unambiguous prefix
//! (`a` for `address`, `l` for `link`, `addr sh` for `address show`).
//! This crate implements the token-stream parser behind that grammar:
//! it consumes the argument vector left to right, resolves abbreviated
//! keywords against the set of keywords valid at the cursor, and turns
//! the invocation into a structured [`Command`].
//!
//! Parsing never touches the network. Once a command is recognized it
//! is handed to an [`Execute`] implementation, which is where address,
//! link, and route manipulation actually happens.
//!
//! # Example
//!
//! ```
//! use iplang::{parse, Command, Family, LinkCmd};
//!
//! let tokens = vec!["l".to_string()];
//! let parsed = parse(tokens, Family::All).unwrap();
//! assert_eq!(parsed.command, Command::Link(LinkCmd::Show { dev: None }));
//! ```
//!
//! # Diagnostics
//!
//! When parsing cannot proceed, the result is a single [`Diagnostic`]
//! naming the tokens already understood, the tokens left over, the
//! token that stopped the parse (if any), and the keywords that would
//! have been accepted at that point:
//!
//! ```
//! use iplang::{parse, Family};
//!
//! let err = parse(vec!["link".into(), "xyz".into()], Family::All).unwrap_err();
//! assert_eq!(err.consumed, vec!["link"]);
//! assert_eq!(err.offending.as_deref(), Some("xyz"));
//! ```

pub mod command;
pub mod error;
pub mod exec;
pub mod matcher;
pub mod parse;
pub mod stream;

pub use command::{
    AddressCmd, Command, Family, LinkAttr, LinkCmd, MonitorObject, NeighborCmd, ParsedInvocation,
    RouteCmd, TcpMetricsCmd, TunnelCmd, XfrmCmd,
};
pub use error::{Diagnostic, Error, ExecError, ParseError, Result};
pub use exec::Execute;
pub use parse::{TOP_LEVEL, parse, run};
