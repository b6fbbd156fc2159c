//! `ip link` production.

use super::Parser;
use crate::command::{LinkAttr, LinkCmd};
use crate::error::ParseError;

const ACTIONS: &[&str] = &["show", "set"];
const ATTRS: &[&str] = &["up", "down", "mtu", "name"];

pub(super) fn parse(p: &mut Parser) -> Result<LinkCmd, ParseError> {
    if p.done() {
        return Ok(LinkCmd::Show { dev: None });
    }

    match p.keyword(ACTIONS)? {
        "show" => {
            if p.done() {
                return Ok(LinkCmd::Show { dev: None });
            }
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(LinkCmd::Show { dev: Some(dev) })
        }
        "set" => {
            let dev = p.value("IFNAME")?;
            // At least one attribute; then keep consuming until the
            // stream runs dry.
            let mut attrs = Vec::new();
            loop {
                match p.keyword(ATTRS)? {
                    "up" => attrs.push(LinkAttr::Up),
                    "down" => attrs.push(LinkAttr::Down),
                    "mtu" => attrs.push(LinkAttr::Mtu(p.value("MTU")?)),
                    "name" => attrs.push(LinkAttr::Name(p.value("NEWNAME")?)),
                    other => unreachable!("matcher returned {other:?} outside the candidate set"),
                }
                if p.done() {
                    break;
                }
            }
            Ok(LinkCmd::Set { dev, attrs })
        }
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    }
}
