//! `ip monitor` production.

use super::Parser;
use crate::command::MonitorObject;
use crate::error::ParseError;

const OBJECTS: &[&str] = &["all", "address", "link", "route", "neigh"];

pub(super) fn parse(p: &mut Parser) -> Result<MonitorObject, ParseError> {
    if p.done() {
        return Ok(MonitorObject::All);
    }

    let object = match p.keyword(OBJECTS)? {
        "all" => MonitorObject::All,
        "address" => MonitorObject::Address,
        "link" => MonitorObject::Link,
        "route" => MonitorObject::Route,
        "neigh" => MonitorObject::Neigh,
        other => unreachable!("matcher returned {other:?} outside the candidate set"),
    };
    Ok(object)
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, Family, MonitorObject};
    use crate::error::ParseError;
    use crate::matcher::find_prefix;
    use crate::parse::parse;

    #[test]
    fn test_bare_monitor_watches_everything() {
        let parsed = parse(vec!["monitor".into()], Family::All).unwrap();
        assert_eq!(parsed.command, Command::Monitor(MonitorObject::All));
    }

    #[test]
    fn test_object_prefix_a_is_ambiguous() {
        // "a" could be "all" or "address" here, unlike at top level.
        assert!(matches!(
            find_prefix("a", super::OBJECTS),
            Err(ParseError::Ambiguous { .. })
        ));
        let diag = parse(vec!["monitor".into(), "a".into()], Family::All).unwrap_err();
        assert_eq!(diag.offending.as_deref(), Some("a"));
        assert_eq!(diag.expected, super::OBJECTS);
    }
}
