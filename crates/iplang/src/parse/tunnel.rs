//! `ip tunnel` production.

use super::Parser;
use crate::command::TunnelCmd;
use crate::error::ParseError;

const ACTIONS: &[&str] = &["add", "delete", "show"];

pub(super) fn parse(p: &mut Parser) -> Result<TunnelCmd, ParseError> {
    if p.done() {
        return Ok(TunnelCmd::Show);
    }

    match p.keyword(ACTIONS)? {
        "add" => {
            let name = p.value("NAME")?;
            p.keyword(&["mode"])?;
            let mode = p.value("MODE")?;
            p.keyword(&["remote"])?;
            let remote = p.value("ADDR")?;
            p.keyword(&["local"])?;
            let local = p.value("ADDR")?;
            Ok(TunnelCmd::Add {
                name,
                mode,
                remote,
                local,
            })
        }
        "delete" => {
            let name = p.value("NAME")?;
            Ok(TunnelCmd::Delete { name })
        }
        "show" => Ok(TunnelCmd::Show),
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    }
}
