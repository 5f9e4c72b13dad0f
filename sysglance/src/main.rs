//! Entry point for the sysglance TUI. Parses args, resolves the endpoint and runs the App.

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use sysglance::app::App;
use sysglance::config::{parse_args, Config, ParsedArgs, MAX_INTERVAL_SECS};
use sysglance::logging::{default_log_path, init_logging};
use sysglance::profiles::{
    load_profiles, save_profiles, ProfileEntry, ProfileRequest, ResolveProfile,
};
use sysglance::source::{parse_endpoint, HttpSource, DEFAULT_ENDPOINT};

const DEMO_PORT: u16 = 5231;
const DEMO_PROFILE: &str = "demo";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(std::env::args()) {
        Ok(v) => v,
        Err(msg) if msg.starts_with("Usage:") => {
            eprintln!("{msg}");
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let log_path = parsed.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("warning: logging disabled ({e:#})");
    }

    // Demo mode short-circuit (ignore URL/profile resolution)
    if parsed.demo || parsed.profile.as_deref() == Some(DEMO_PROFILE) {
        return run_demo_mode(&parsed).await;
    }

    let entry = match resolve_entry(&parsed)? {
        Resolved::Entry(entry) => entry,
        Resolved::Demo => return run_demo_mode(&parsed).await,
        Resolved::Aborted => return Ok(()),
    };
    let config = build_config(&parsed, &entry)?;
    if parsed.dry_run {
        print_config(&config);
        return Ok(());
    }
    App::new(HttpSource::new(config.endpoint.clone()), &config)
        .run()
        .await
}

fn build_config(parsed: &ParsedArgs, entry: &ProfileEntry) -> anyhow::Result<Config> {
    let mut config = Config::default().with_endpoint(&entry.url)?;
    if let Some(secs) = parsed
        .interval_secs
        .or(entry.interval_secs)
        .filter(|s| (1..=MAX_INTERVAL_SECS).contains(s))
    {
        config.interval = Duration::from_secs(secs);
    }
    if let Some(theme) = parsed.theme {
        config.theme = theme;
    }
    config.auto_refresh = !parsed.no_auto_refresh;
    config.fence_stale = parsed.fence_stale;
    Ok(config)
}

fn print_config(c: &Config) {
    println!("endpoint: {}", c.endpoint);
    println!("interval: {}s", c.interval.as_secs());
    println!("auto-refresh: {}", if c.auto_refresh { "on" } else { "off" });
    println!("theme: {}", c.theme.name());
    println!("fence-stale: {}", if c.fence_stale { "on" } else { "off" });
}

enum Resolved {
    Entry(ProfileEntry),
    Demo,
    /// The user backed out of a prompt.
    Aborted,
}

fn resolve_entry(parsed: &ParsedArgs) -> anyhow::Result<Resolved> {
    let profiles_file = load_profiles();
    let req = ProfileRequest {
        profile_name: parsed.profile.clone(),
        url: parsed.url.clone(),
        interval_secs: parsed.interval_secs,
    };

    let mut profiles_mut = profiles_file.clone();
    let entry = match req.resolve(&profiles_file) {
        ResolveProfile::Direct(entry) => {
            parse_endpoint(&entry.url)?;
            if let Some(name) = parsed.profile.as_ref() {
                match profiles_mut.profiles.get(name) {
                    None => {
                        // New profile: auto-save immediately
                        profiles_mut.profiles.insert(name.clone(), entry.clone());
                        save_profiles(&profiles_mut)?;
                        tracing::info!(profile = %name, "profile created");
                    }
                    Some(existing) if *existing != entry => {
                        let overwrite = parsed.save
                            || prompt_yes_no(&format!("Overwrite existing profile '{name}'? [y/N]: "));
                        if overwrite {
                            profiles_mut.profiles.insert(name.clone(), entry.clone());
                            save_profiles(&profiles_mut)?;
                            tracing::info!(profile = %name, "profile updated");
                        }
                    }
                    Some(_) => {}
                }
            }
            entry
        }
        ResolveProfile::Loaded(entry) => entry,
        ResolveProfile::Default => ProfileEntry {
            url: DEFAULT_ENDPOINT.to_string(),
            interval_secs: parsed.interval_secs,
        },
        ResolveProfile::PromptSelect(mut names) => {
            // demo is always on offer
            if !names.iter().any(|n| n == DEMO_PROFILE) {
                names.push(DEMO_PROFILE.into());
            }
            eprintln!("Select profile:");
            for (i, n) in names.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, n);
            }
            let line = prompt_string("Enter number (or blank to abort): ")?;
            let Some(name) = line
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|idx| (1..=names.len()).contains(idx))
                .map(|idx| &names[idx - 1])
            else {
                return Ok(Resolved::Aborted);
            };
            if name == DEMO_PROFILE {
                return Ok(Resolved::Demo);
            }
            match profiles_mut.profiles.get(name).cloned() {
                Some(mut entry) => {
                    if parsed.interval_secs.is_some() {
                        entry.interval_secs = parsed.interval_secs;
                    }
                    entry
                }
                None => return Ok(Resolved::Aborted),
            }
        }
        ResolveProfile::PromptCreate(name) => {
            eprintln!("Profile '{name}' does not exist yet.");
            let url = prompt_string("Enter URL (http://HOST:PORT/system-info): ")?;
            let url = url.trim().to_string();
            if url.is_empty() {
                return Ok(Resolved::Aborted);
            }
            parse_endpoint(&url)?;
            let secs = prompt_string("Refresh interval in seconds (blank for 60): ")?;
            let entry = ProfileEntry {
                url,
                interval_secs: secs.trim().parse::<u64>().ok().filter(|s| *s > 0),
            };
            profiles_mut.profiles.insert(name, entry.clone());
            save_profiles(&profiles_mut)?;
            entry
        }
    };
    Ok(Resolved::Entry(entry))
}

fn prompt_yes_no(prompt: &str) -> bool {
    match prompt_string(prompt) {
        Ok(line) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn prompt_string(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

// --- Demo Mode ---

async fn run_demo_mode(parsed: &ParsedArgs) -> anyhow::Result<()> {
    let url = format!("http://127.0.0.1:{DEMO_PORT}/system-info");
    let entry = ProfileEntry {
        url,
        interval_secs: parsed.interval_secs,
    };
    let config = build_config(parsed, &entry)?;
    if parsed.dry_run {
        print_config(&config);
        return Ok(());
    }

    let agent = DemoAgent::spawn(DEMO_PORT)?;
    // Give the agent a brief moment to bind
    tokio::time::sleep(Duration::from_millis(300)).await;
    let res = App::new(HttpSource::new(config.endpoint.clone()), &config)
        .run()
        .await;
    drop(agent);
    res
}

/// Kills the spawned agent when dropped.
struct DemoAgent(Child);

impl DemoAgent {
    fn spawn(port: u16) -> anyhow::Result<Self> {
        let child = Command::new(find_agent_executable())
            .arg("--port")
            .arg(port.to_string())
            .arg("--bind")
            .arg("127.0.0.1")
            // the dashboard owns the terminal
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::info!(port, pid = child.id(), "demo agent started");
        Ok(Self(child))
    }
}

impl Drop for DemoAgent {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn find_agent_executable() -> std::path::PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            #[cfg(windows)]
            let name = "sysglance_agent.exe";
            #[cfg(not(windows))]
            let name = "sysglance_agent";
            let candidate = parent.join(name);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    // Fallback to relying on PATH
    std::path::PathBuf::from("sysglance_agent")
}
