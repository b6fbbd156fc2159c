//! ip command - network configuration via the shorthand token grammar.
//!
//! Flags are handled here; everything after them is handed untouched
//! to the iplang interpreter, which is where `addr sh` becomes
//! `address show`. This binary's executor is a dry-run one: it echoes
//! the recognized command instead of touching the network, in
//! canonical tokens or as JSON with `-j`.

use clap::Parser;
use iplang::{Error, ExecError, Execute, Family, ParsedInvocation};

#[derive(Parser)]
#[command(
    name = "ip",
    version,
    about = "Network configuration tool",
    after_help = "Keywords may be abbreviated to any unambiguous prefix:\n  \
                  `ip a` runs `ip address show`\n  \
                  `ip r a 10.0.0.0/8 v 10.0.0.1` runs `ip route add 10.0.0.0/8 via 10.0.0.1`"
)]
struct Cli {
    /// Use IPv4 only.
    #[arg(short = '4')]
    ipv4: bool,

    /// Use IPv6 only (wins over -4 when both are given).
    #[arg(short = '6')]
    ipv6: bool,

    /// Output JSON.
    #[arg(short = 'j', long)]
    json: bool,

    /// Pretty print JSON.
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Command tokens, e.g. `addr show` or `route add 10.0.0.0/8 via 10.0.0.1`.
    #[arg(trailing_var_arg = true)]
    tokens: Vec<String>,
}

/// Echo the recognized command instead of executing it.
struct DryRun {
    json: bool,
    pretty: bool,
}

impl Execute for DryRun {
    fn execute(&mut self, invocation: &ParsedInvocation) -> Result<String, ExecError> {
        if self.json {
            let render = if self.pretty {
                serde_json::to_string_pretty(invocation)
            } else {
                serde_json::to_string(invocation)
            };
            render.map_err(ExecError::new)
        } else {
            Ok(invocation.command.to_tokens().join(" "))
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let family = Family::from_flags(cli.ipv4, cli.ipv6);
    let mut exec = DryRun {
        json: cli.json,
        pretty: cli.pretty,
    };

    match iplang::run(cli.tokens, family, &mut exec) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(err @ Error::Parse(_)) => {
            eprintln!("ip: {err}");
            std::process::exit(1);
        }
        Err(err @ Error::Execution { .. }) => {
            eprintln!("ip: {err}");
            std::process::exit(2);
        }
    }
}
