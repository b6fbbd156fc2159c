//! `ip route` production.

use super::Parser;
use crate::command::RouteCmd;
use crate::error::ParseError;

const ACTIONS: &[&str] = &["add", "delete", "show"];

pub(super) fn parse(p: &mut Parser) -> Result<RouteCmd, ParseError> {
    if p.done() {
        return Ok(RouteCmd::Show);
    }

    match p.keyword(ACTIONS)? {
        "add" => {
            let prefix = p.value("PREFIX")?;
            p.keyword(&["via"])?;
            let via = p.value("GATEWAY")?;
            let dev = if p.done() {
                None
            } else {
                p.keyword(&["dev"])?;
                Some(p.value("IFNAME")?)
            };
            Ok(RouteCmd::Add { prefix, via, dev })
        }
        "delete" => {
            let prefix = p.value("PREFIX")?;
            Ok(RouteCmd::Delete { prefix })
        }
        "show" => Ok(RouteCmd::Show),
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    }
}
