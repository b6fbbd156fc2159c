//! `ip neigh` production.

use super::Parser;
use crate::command::NeighborCmd;
use crate::error::ParseError;

const ACTIONS: &[&str] = &["show", "flush"];

pub(super) fn parse(p: &mut Parser) -> Result<NeighborCmd, ParseError> {
    if p.done() {
        return Ok(NeighborCmd::Show { dev: None });
    }

    match p.keyword(ACTIONS)? {
        "show" => {
            if p.done() {
                return Ok(NeighborCmd::Show { dev: None });
            }
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(NeighborCmd::Show { dev: Some(dev) })
        }
        "flush" => {
            p.keyword(&["dev"])?;
            let dev = p.value("IFNAME")?;
            Ok(NeighborCmd::Flush { dev })
        }
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, Family, NeighborCmd};
    use crate::parse::parse;

    fn neigh(args: &[&str]) -> Result<NeighborCmd, crate::error::Diagnostic> {
        let mut tokens = vec!["neigh".to_string()];
        tokens.extend(args.iter().map(|a| a.to_string()));
        parse(tokens, Family::All).map(|parsed| match parsed.command {
            Command::Neighbor(cmd) => cmd,
            other => panic!("expected a neighbor command, got {other:?}"),
        })
    }

    #[test]
    fn test_bare_neigh_shows_all() {
        assert_eq!(neigh(&[]).unwrap(), NeighborCmd::Show { dev: None });
    }

    #[test]
    fn test_flush_requires_device() {
        let diag = neigh(&["flush", "dev"]).unwrap_err();
        assert_eq!(diag.consumed, ["neigh", "flush", "dev"]);
        assert_eq!(diag.expected, ["IFNAME"]);
        assert_eq!(
            neigh(&["flush", "dev", "eth0"]).unwrap(),
            NeighborCmd::Flush { dev: "eth0".into() }
        );
    }
}
