//! Connection profiles: load/save a JSON mapping of profile name -> { url, interval_secs }
//! Stored under XDG config dir: $XDG_CONFIG_HOME/sysglance/profiles.json (fallback ~/.config/sysglance/profiles.json)

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProfileEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileEntry>,
    #[serde(default)]
    pub version: u32,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("sysglance")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sysglance")
    }
}

pub fn profiles_path() -> PathBuf {
    config_dir().join("profiles.json")
}

pub fn load_profiles() -> ProfilesFile {
    let path = profiles_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable profiles file");
            ProfilesFile::default()
        }),
        Err(_) => ProfilesFile::default(),
    }
}

pub fn save_profiles(p: &ProfilesFile) -> anyhow::Result<()> {
    let path = profiles_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(p)?;
    fs::write(&path, data)?;
    Ok(())
}

#[derive(Debug, PartialEq)]
pub enum ResolveProfile {
    /// Use the provided runtime inputs (maybe persisted by the caller).
    Direct(ProfileEntry),
    /// Loaded from an existing profile entry
    Loaded(ProfileEntry),
    /// Should prompt user to select among profile names
    PromptSelect(Vec<String>),
    /// Should prompt user to create a new profile (name)
    PromptCreate(String),
    /// Nothing given and nothing saved: fall back to the default endpoint
    Default,
}

pub struct ProfileRequest {
    pub profile_name: Option<String>,
    pub url: Option<String>,
    pub interval_secs: Option<u64>,
}

impl ProfileRequest {
    pub fn resolve(self, pf: &ProfilesFile) -> ResolveProfile {
        match (self.profile_name, self.url) {
            (Some(name), None) => match pf.profiles.get(&name) {
                Some(entry) => {
                    let mut entry = entry.clone();
                    // an explicit flag beats the stored interval for this run
                    if self.interval_secs.is_some() {
                        entry.interval_secs = self.interval_secs;
                    }
                    ResolveProfile::Loaded(entry)
                }
                None => ResolveProfile::PromptCreate(name),
            },
            (_, Some(url)) => ResolveProfile::Direct(ProfileEntry {
                url,
                interval_secs: self.interval_secs,
            }),
            (None, None) if pf.profiles.is_empty() => ResolveProfile::Default,
            (None, None) => ResolveProfile::PromptSelect(pf.profiles.keys().cloned().collect()),
        }
    }
}
