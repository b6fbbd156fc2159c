//! `ip address` production.
//!
//! Grammar:
//!
//! ```text
//! address                          -> show all
//! address show [dev IFNAME]
//! address add ADDRESS/PREFIXLEN dev IFNAME
//! address delete ADDRESS/PREFIXLEN dev IFNAME
//! address flush dev IFNAME
//! ```
//!
//! This is the template the other subcommand productions follow:
//! default to "show all" on an exhausted stream, resolve the action
//! keyword by prefix, then consume the action's fixed tail.

use super::Parser;
use crate::command::AddressCmd;
use crate::error::ParseError;

const ACTIONS: &[&str] = &["add", "delete", "show", "flush"];

pub(super) fn parse(p: &mut Parser) -> Result<AddressCmd, ParseError> {
    // Bare `ip address` is an explicit grammar rule, not a fallback.
    if p.done() {
        return Ok(AddressCmd::Show { dev: None });
    }

    match p.keyword(ACTIONS)? {
        "add" => {
            let address = p.value("ADDRESS/PREFIXLEN")?;
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(AddressCmd::Add { address, dev })
        }
        "delete" => {
            let address = p.value("ADDRESS/PREFIXLEN")?;
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(AddressCmd::Delete { address, dev })
        }
        "show" => {
            if p.done() {
                return Ok(AddressCmd::Show { dev: None });
            }
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(AddressCmd::Show { dev: Some(dev) })
        }
        "flush" => {
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(AddressCmd::Flush { dev })
        }
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    }
}
