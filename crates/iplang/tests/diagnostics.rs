//! End-to-end checks of the diagnostic text users actually see.

use iplang::{Family, parse};

fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_unknown_token_message_names_all_four_parts() {
    let diag = parse(tokens(&["route", "frob", "10.0.0.0/8"]), Family::All).unwrap_err();
    let text = diag.to_string();
    assert_eq!(
        text,
        "this was fine: 'route', and this was left, 'frob 10.0.0.0/8', \
         and this was not understood, 'frob'; only options are 'add delete show'"
    );
}

#[test]
fn test_exhausted_input_message() {
    let diag = parse(tokens(&["tunnel", "add", "gre1"]), Family::All).unwrap_err();
    assert_eq!(
        diag.to_string(),
        "ran out of arguments after 'tunnel add gre1', expected one of 'mode'"
    );
}

#[test]
fn test_no_arguments_message_lists_every_subcommand() {
    let diag = parse(Vec::new(), Family::All).unwrap_err();
    let text = diag.to_string();
    assert!(text.starts_with("ran out of arguments, expected one of"));
    for keyword in iplang::TOP_LEVEL {
        assert!(text.contains(keyword), "missing {keyword:?} in {text}");
    }
}

#[test]
fn test_ambiguous_prefix_reported_like_no_match() {
    let ambiguous = parse(tokens(&["t"]), Family::All).unwrap_err();
    let unknown = parse(tokens(&["z"]), Family::All).unwrap_err();
    // Same shape for the user: offending token plus the full
    // expectation set, with no hint of a silent pick.
    assert_eq!(ambiguous.expected, unknown.expected);
    assert_eq!(ambiguous.offending.as_deref(), Some("t"));
    assert!(ambiguous.to_string().contains("only options are"));
}
