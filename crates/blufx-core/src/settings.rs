//! Flat `key=value` persistence of the runtime state.
//!
//! One assignment per line, no quoting. Loading is tolerant: unknown keys
//! are skipped, missing keys keep their current value and a malformed value
//! only loses that one field. A line is matched by substring search on the
//! text before the first `=`, in [`KEY_ORDER`], so keys must stay
//! prefix-distinct.

use std::path::{Path, PathBuf};

use crate::error::{FxError, Result};
use crate::parameter::Param;
use crate::state::{Feature, RuntimeState};

/// A persisted setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Toggle(Feature),
    Value(Param),
}

impl SettingKey {
    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::Toggle(f) => f.key(),
            SettingKey::Value(p) => p.key(),
        }
    }
}

/// Write order, which is also the match order on load.
pub const KEY_ORDER: [SettingKey; 16] = [
    SettingKey::Toggle(Feature::PostProcessing),
    SettingKey::Toggle(Feature::FpsLimiter),
    SettingKey::Toggle(Feature::IdleCameraControl),
    SettingKey::Value(Param::Brightness),
    SettingKey::Value(Param::Contrast),
    SettingKey::Value(Param::Saturation),
    SettingKey::Value(Param::RedScale),
    SettingKey::Value(Param::GreenScale),
    SettingKey::Value(Param::BlueScale),
    SettingKey::Value(Param::RedOffset),
    SettingKey::Value(Param::GreenOffset),
    SettingKey::Value(Param::BlueOffset),
    SettingKey::Value(Param::Vignette),
    SettingKey::Value(Param::RaleighScale),
    SettingKey::Value(Param::MaxFrameRate),
    SettingKey::Value(Param::IdleDisableSeconds),
];

/// Where the settings text lives.
pub trait SettingsStore {
    fn read(&self) -> Result<String>;
    fn write(&mut self, contents: &str) -> Result<()>;
}

/// Settings file on disk.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| FxError::PersistenceMissing {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        std::fs::write(&self.path, contents).map_err(|source| FxError::PersistenceWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// Outcome of parsing a settings text.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Keys that were applied, in file order.
    pub applied: Vec<&'static str>,
    /// Recognized keys whose value could not be parsed.
    pub rejected: Vec<FxError>,
}

/// Render the full state as settings text.
pub fn serialize(state: &RuntimeState) -> String {
    let mut out = String::new();
    for key in KEY_ORDER {
        let line = match key {
            SettingKey::Toggle(f) => format!("{}={}\n", f.key(), state.features.get(f) as i32),
            SettingKey::Value(p) => format!("{}={}\n", p.key(), state.params.get(p)),
        };
        out.push_str(&line);
    }
    out
}

fn match_key(name: &str) -> Option<SettingKey> {
    KEY_ORDER.iter().copied().find(|key| name.contains(key.name()))
}

/// Nonzero integers are on. Decimals are truncated first, so `1.0` reads
/// the same as `1`.
fn parse_toggle(value: &str) -> Option<bool> {
    if let Ok(n) = value.parse::<i32>() {
        return Some(n != 0);
    }
    if let Some(v) = value.parse::<f32>().ok().filter(|v| v.is_finite()) {
        return Some(v.trunc() != 0.0);
    }
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Apply settings text on top of the current state.
pub fn parse_into(text: &str, state: &mut RuntimeState) -> LoadReport {
    let mut report = LoadReport::default();

    for line in text.lines() {
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let Some(key) = match_key(name) else {
            continue;
        };
        let value = value.trim();

        let ok = match key {
            SettingKey::Toggle(f) => parse_toggle(value)
                .map(|enabled| state.features.set(f, enabled))
                .is_some(),
            SettingKey::Value(p) => match value.parse::<f32>() {
                Ok(v) if v.is_finite() => {
                    state.params.set(p, v);
                    true
                }
                _ => false,
            },
        };

        if ok {
            report.applied.push(key.name());
        } else {
            report.rejected.push(FxError::MalformedLine {
                key: key.name(),
                value: value.to_string(),
            });
        }
    }

    report
}

/// Load settings from the store into `state`.
///
/// The first successful load of a state also captures the user restore
/// point. On error the state is left untouched.
pub fn load(store: &dyn SettingsStore, state: &mut RuntimeState) -> Result<LoadReport> {
    let text = store.read()?;
    let report = parse_into(&text, state);
    for err in &report.rejected {
        log::warn!("{}", err);
    }
    if state.capture_user_snapshot() {
        log::debug!("captured user restore point");
    }
    Ok(report)
}

pub fn save(store: &mut dyn SettingsStore, state: &RuntimeState) -> Result<()> {
    store.write(&serialize(state))
}
