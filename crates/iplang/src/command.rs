//! Structured commands produced by a successful parse.
//!
//! Leaf values (interface names, CIDRs, gateway addresses) are carried
//! as the strings the user typed. Validating them is the executor's
//! job, not the grammar's.

use serde::{Deserialize, Serialize};

/// Which IP version family a command targets.
///
/// Resolved once from the `-4`/`-6` startup flags, before any token is
/// consumed. `-6` takes precedence when both flags are given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// No family filter.
    #[default]
    All,
    /// IPv4 only.
    V4,
    /// IPv6 only.
    V6,
}

impl Family {
    /// Resolve the family from the mutually-exclusive startup flags.
    pub fn from_flags(ipv4: bool, ipv6: bool) -> Self {
        if ipv6 {
            Family::V6
        } else if ipv4 {
            Family::V4
        } else {
            Family::All
        }
    }
}

/// One fully parsed invocation: the command plus its family filter.
///
/// The family comes from flags, not tokens, so it rides alongside the
/// command rather than inside the token grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInvocation {
    pub family: Family,
    pub command: Command,
}

/// The command recognized from the token stream.
///
/// Exactly one variant results from a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Address(AddressCmd),
    Link(LinkCmd),
    Route(RouteCmd),
    Neighbor(NeighborCmd),
    Monitor(MonitorObject),
    Tunnel(TunnelCmd),
    TcpMetrics(TcpMetricsCmd),
    Xfrm(XfrmCmd),
}

/// Address manipulation (`ip address ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressCmd {
    /// Show addresses, optionally for one device.
    Show { dev: Option<String> },
    /// Add an address to a device.
    Add { address: String, dev: String },
    /// Delete an address from a device.
    Delete { address: String, dev: String },
    /// Flush all addresses on a device.
    Flush { dev: String },
}

/// Link manipulation (`ip link ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCmd {
    /// Show links, optionally for one device.
    Show { dev: Option<String> },
    /// Change device attributes.
    Set { dev: String, attrs: Vec<LinkAttr> },
}

/// One attribute change in `ip link set`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAttr {
    Up,
    Down,
    Mtu(String),
    Name(String),
}

/// Route manipulation (`ip route ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteCmd {
    /// Show the routing table.
    Show,
    /// Add a route through a gateway.
    Add {
        prefix: String,
        via: String,
        dev: Option<String>,
    },
    /// Delete a route.
    Delete { prefix: String },
}

/// Neighbor (ARP/NDP) cache manipulation (`ip neigh ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborCmd {
    /// Show neighbor entries, optionally for one device.
    Show { dev: Option<String> },
    /// Flush neighbor entries on a device.
    Flush { dev: String },
}

/// What `ip monitor` watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorObject {
    All,
    Address,
    Link,
    Route,
    Neigh,
}

/// Tunnel manipulation (`ip tunnel ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelCmd {
    /// List tunnels.
    Show,
    /// Create a tunnel.
    Add {
        name: String,
        mode: String,
        remote: String,
        local: String,
    },
    /// Delete a tunnel.
    Delete { name: String },
}

/// TCP metrics query (`ip tcp_metrics ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TcpMetricsCmd {
    /// Show cached metrics, optionally filtered by source address.
    Show { saddr: Option<String> },
}

/// XFRM (IPsec) queries (`ip xfrm ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XfrmCmd {
    /// Show the security association database.
    State,
    /// Show the security policy database.
    Policy,
}

impl Command {
    /// Canonical (fully spelled) name of the subcommand.
    ///
    /// Used to prefix execution errors with their owner.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Address(_) => "address",
            Command::Link(_) => "link",
            Command::Route(_) => "route",
            Command::Neighbor(_) => "neigh",
            Command::Monitor(_) => "monitor",
            Command::Tunnel(_) => "tunnel",
            Command::TcpMetrics(_) => "tcp_metrics",
            Command::Xfrm(_) => "xfrm",
        }
    }

    /// Render the command in its canonical, non-abbreviated token form.
    ///
    /// Re-parsing these tokens yields an identical command, so this is
    /// also how a recognized command is echoed back to the user.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut out: Vec<String> = vec![self.name().to_string()];
        match self {
            Command::Address(cmd) => match cmd {
                AddressCmd::Show { dev } => {
                    out.push("show".into());
                    if let Some(dev) = dev {
                        out.push("dev".into());
                        out.push(dev.clone());
                    }
                }
                AddressCmd::Add { address, dev } => {
                    out.extend(["add".into(), address.clone(), "dev".into(), dev.clone()]);
                }
                AddressCmd::Delete { address, dev } => {
                    out.extend(["delete".into(), address.clone(), "dev".into(), dev.clone()]);
                }
                AddressCmd::Flush { dev } => {
                    out.extend(["flush".into(), "dev".into(), dev.clone()]);
                }
            },
            Command::Link(cmd) => match cmd {
                LinkCmd::Show { dev } => {
                    out.push("show".into());
                    if let Some(dev) = dev {
                        out.push("dev".into());
                        out.push(dev.clone());
                    }
                }
                LinkCmd::Set { dev, attrs } => {
                    out.push("set".into());
                    out.push(dev.clone());
                    for attr in attrs {
                        match attr {
                            LinkAttr::Up => out.push("up".into()),
                            LinkAttr::Down => out.push("down".into()),
                            LinkAttr::Mtu(mtu) => out.extend(["mtu".into(), mtu.clone()]),
                            LinkAttr::Name(name) => out.extend(["name".into(), name.clone()]),
                        }
                    }
                }
            },
            Command::Route(cmd) => match cmd {
                RouteCmd::Show => out.push("show".into()),
                RouteCmd::Add { prefix, via, dev } => {
                    out.extend(["add".into(), prefix.clone(), "via".into(), via.clone()]);
                    if let Some(dev) = dev {
                        out.push("dev".into());
                        out.push(dev.clone());
                    }
                }
                RouteCmd::Delete { prefix } => {
                    out.extend(["delete".into(), prefix.clone()]);
                }
            },
            Command::Neighbor(cmd) => match cmd {
                NeighborCmd::Show { dev } => {
                    out.push("show".into());
                    if let Some(dev) = dev {
                        out.push("dev".into());
                        out.push(dev.clone());
                    }
                }
                NeighborCmd::Flush { dev } => {
                    out.extend(["flush".into(), "dev".into(), dev.clone()]);
                }
            },
            Command::Monitor(object) => {
                out.push(
                    match object {
                        MonitorObject::All => "all",
                        MonitorObject::Address => "address",
                        MonitorObject::Link => "link",
                        MonitorObject::Route => "route",
                        MonitorObject::Neigh => "neigh",
                    }
                    .into(),
                );
            }
            Command::Tunnel(cmd) => match cmd {
                TunnelCmd::Show => out.push("show".into()),
                TunnelCmd::Add {
                    name,
                    mode,
                    remote,
                    local,
                } => {
                    out.extend([
                        "add".into(),
                        name.clone(),
                        "mode".into(),
                        mode.clone(),
                        "remote".into(),
                        remote.clone(),
                        "local".into(),
                        local.clone(),
                    ]);
                }
                TunnelCmd::Delete { name } => {
                    out.extend(["delete".into(), name.clone()]);
                }
            },
            Command::TcpMetrics(TcpMetricsCmd::Show { saddr }) => {
                out.push("show".into());
                if let Some(saddr) = saddr {
                    out.push("saddr".into());
                    out.push(saddr.clone());
                }
            }
            Command::Xfrm(cmd) => {
                out.push(
                    match cmd {
                        XfrmCmd::State => "state",
                        XfrmCmd::Policy => "policy",
                    }
                    .into(),
                );
                out.push("show".into());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_from_flags() {
        assert_eq!(Family::from_flags(false, false), Family::All);
        assert_eq!(Family::from_flags(true, false), Family::V4);
        assert_eq!(Family::from_flags(false, true), Family::V6);
        // -6 wins when both are given.
        assert_eq!(Family::from_flags(true, true), Family::V6);
    }

    #[test]
    fn test_canonical_tokens() {
        let cmd = Command::Address(AddressCmd::Add {
            address: "192.0.2.1/24".into(),
            dev: "eth0".into(),
        });
        assert_eq!(
            cmd.to_tokens(),
            ["address", "add", "192.0.2.1/24", "dev", "eth0"]
        );

        let cmd = Command::Link(LinkCmd::Show { dev: None });
        assert_eq!(cmd.to_tokens(), ["link", "show"]);

        let cmd = Command::Xfrm(XfrmCmd::Policy);
        assert_eq!(cmd.to_tokens(), ["xfrm", "policy", "show"]);
    }

    #[test]
    fn test_json_shape() {
        let parsed = ParsedInvocation {
            family: Family::V4,
            command: Command::Route(RouteCmd::Delete {
                prefix: "198.51.100.0/24".into(),
            }),
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["family"], "v4");
        assert_eq!(json["command"]["route"]["delete"]["prefix"], "198.51.100.0/24");
    }
}
