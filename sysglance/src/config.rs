//! Runtime configuration and command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::history::HISTORY_CAP;
use crate::source::{parse_endpoint, DEFAULT_ENDPOINT};
use crate::timer::DEFAULT_INTERVAL;
use crate::ui::theme::ThemeMode;

/// Longest accepted refresh interval (one day).
pub const MAX_INTERVAL_SECS: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub interval: Duration,
    pub history_cap: usize,
    pub theme: ThemeMode,
    pub auto_refresh: bool,
    pub fence_stale: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            interval: DEFAULT_INTERVAL,
            history_cap: HISTORY_CAP,
            theme: ThemeMode::Dark,
            auto_refresh: true,
            fence_stale: false,
        }
    }
}

impl Config {
    pub fn with_endpoint(mut self, raw: &str) -> anyhow::Result<Self> {
        self.endpoint = parse_endpoint(raw)?;
        Ok(self)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ParsedArgs {
    pub url: Option<String>,
    pub interval_secs: Option<u64>,
    pub profile: Option<String>,
    pub save: bool,
    pub theme: Option<ThemeMode>,
    pub no_auto_refresh: bool,
    pub fence_stale: bool,
    pub log_file: Option<PathBuf>,
    pub demo: bool,
    pub dry_run: bool,
}

pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--interval SECS|-i SECS] [--profile NAME|-P NAME] [--save] [--theme light|dark] \
         [--no-auto-refresh] [--fence-stale] [--log-file PATH] [--demo] [--dry-run] [http://HOST:PORT/system-info]"
    )
}

fn parse_interval(v: Option<String>) -> Result<u64, String> {
    match v.as_deref().map(str::parse::<u64>) {
        Some(Ok(secs)) if (1..=MAX_INTERVAL_SECS).contains(&secs) => Ok(secs),
        _ => Err(format!(
            "--interval expects a number of seconds between 1 and {MAX_INTERVAL_SECS}"
        )),
    }
}

fn parse_theme(v: Option<String>) -> Result<ThemeMode, String> {
    v.as_deref()
        .and_then(ThemeMode::from_name)
        .ok_or_else(|| "--theme expects 'light' or 'dark'".into())
}

/// `Err` carries text to print (usage or a parse complaint) before exiting.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "sysglance".into());
    let mut out = ParsedArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            "--interval" | "-i" => out.interval_secs = Some(parse_interval(it.next())?),
            "--profile" | "-P" => out.profile = it.next(),
            "--theme" => out.theme = Some(parse_theme(it.next())?),
            "--log-file" => out.log_file = it.next().map(PathBuf::from),
            "--save" => out.save = true,
            "--no-auto-refresh" => out.no_auto_refresh = true,
            "--fence-stale" => out.fence_stale = true,
            "--demo" => out.demo = true,
            "--dry-run" => out.dry_run = true,
            _ if arg.starts_with("--") && arg.contains('=') => {
                let Some((key, v)) = arg.split_once('=') else {
                    continue;
                };
                let v = Some(v.to_string()).filter(|v| !v.is_empty());
                match key {
                    "--interval" => out.interval_secs = Some(parse_interval(v)?),
                    "--profile" => out.profile = v,
                    "--theme" => out.theme = Some(parse_theme(v)?),
                    "--log-file" => out.log_file = v.map(PathBuf::from),
                    _ => return Err(format!("Unknown option {key}. {}", usage(&prog))),
                }
            }
            _ if arg.starts_with('-') => {
                return Err(format!("Unknown option {arg}. {}", usage(&prog)));
            }
            _ => {
                if out.url.is_none() {
                    out.url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument. {}", usage(&prog)));
                }
            }
        }
    }
    Ok(out)
}
