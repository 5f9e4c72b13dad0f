//! Argument parsing for the agent binary.

use std::net::IpAddr;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, PartialEq)]
pub struct AgentArgs {
    pub port: u16,
    pub bind: IpAddr,
}

pub fn usage(prog: &str) -> String {
    format!("Usage: {prog} [--port PORT|-p PORT] [--bind ADDR]")
}

/// `Err` carries text to print before exiting.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<AgentArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "sysglance_agent".into());
    let mut long: Option<String> = None;
    let mut short: Option<String> = None;
    let mut bind: Option<String> = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            "--port" => long = it.next(),
            "-p" => short = it.next(),
            "--bind" => bind = it.next(),
            _ if a.starts_with("--port=") => {
                if let Some((_, v)) = a.split_once('=') {
                    long = Some(v.to_string());
                }
            }
            _ if a.starts_with("--bind=") => {
                if let Some((_, v)) = a.split_once('=') {
                    bind = Some(v.to_string());
                }
            }
            _ => return Err(format!("Unexpected argument {a}. {}", usage(&prog))),
        }
    }

    let port = match long.or(short) {
        Some(s) => s.parse::<u16>().map_err(|_| format!("invalid port '{s}'"))?,
        None => DEFAULT_PORT,
    };
    let bind = match bind {
        Some(s) => s.parse::<IpAddr>().map_err(|_| format!("invalid bind address '{s}'"))?,
        None => IpAddr::from([0, 0, 0, 0]),
    };
    Ok(AgentArgs { port, bind })
}
