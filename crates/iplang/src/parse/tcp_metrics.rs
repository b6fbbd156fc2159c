//! `ip tcp_metrics` production.
//!
//! Reached through either top-level spelling (`tcp_metrics` or
//! `tcpmetrics`); both are literal candidates in the dispatch set.

use super::Parser;
use crate::command::TcpMetricsCmd;
use crate::error::ParseError;

pub(super) fn parse(p: &mut Parser) -> Result<TcpMetricsCmd, ParseError> {
    if p.done() {
        return Ok(TcpMetricsCmd::Show { saddr: None });
    }

    p.keyword(&["show"])?;
    if p.done() {
        return Ok(TcpMetricsCmd::Show { saddr: None });
    }
    p.keyword(&["saddr"])?;
    let saddr = p.value("ADDR")?;
    Ok(TcpMetricsCmd::Show { saddr: Some(saddr) })
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, Family, TcpMetricsCmd};
    use crate::parse::parse;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_both_spellings_reach_the_same_command() {
        for spelling in ["tcp_metrics", "tcpmetrics"] {
            let parsed = parse(tokens(&[spelling]), Family::All).unwrap();
            assert_eq!(
                parsed.command,
                Command::TcpMetrics(TcpMetricsCmd::Show { saddr: None }),
                "spelling {spelling:?}"
            );
        }
    }

    #[test]
    fn test_saddr_filter() {
        let parsed = parse(tokens(&["tcpm", "show", "saddr", "192.0.2.1"]), Family::All).unwrap();
        assert_eq!(
            parsed.command,
            Command::TcpMetrics(TcpMetricsCmd::Show {
                saddr: Some("192.0.2.1".into())
            })
        );
    }
}
