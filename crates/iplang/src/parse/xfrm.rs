//! `ip xfrm` production.
//!
//! Unlike the other subcommands, bare `ip xfrm` is an error: the
//! object (`state` or `policy`) must be named before show defaults in.

use super::Parser;
use crate::command::XfrmCmd;
use crate::error::ParseError;

const OBJECTS: &[&str] = &["state", "policy"];

pub(super) fn parse(p: &mut Parser) -> Result<XfrmCmd, ParseError> {
    let object = match p.keyword(OBJECTS)? {
        "state" => XfrmCmd::State,
        "policy" => XfrmCmd::Policy,
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    };
    if !p.done() {
        p.keyword(&["show"])?;
    }
    Ok(object)
}
