//! INI-backed settings store.
//!
//! Each setting has a dotted name `section.key` and belongs to a file group.
//! A group lives in `<dir>/<file>.ini`, so `register("video", "screen.width", ..)`
//! reads and writes:
//!
//! ```ini
//! ; Settings/video.ini
//! [screen]
//! width = 800
//! ```
//!
//! Values are read once at registration and only written back by
//! [`Settings::save_all`]. Stored text goes through the setting's validator,
//! which maps anything unparseable to the zero value of its type.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{debug, info};
use rustc_hash::FxHashMap;

pub const DEFAULT_SETTINGS_DIR: &str = "Settings";
const CONFIG_SUFFIX: &str = "ini";

/// A typed setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Str(String),
    Bool(bool),
    Int(i32),
    Float(f32),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Str(s) => write!(f, "{}", s),
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Int(i) => write!(f, "{}", i),
            SettingValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(value)
    }
}

impl From<f32> for SettingValue {
    fn from(value: f32) -> Self {
        SettingValue::Float(value)
    }
}

/// Turns stored text into a typed value.
pub type Validator = fn(&str) -> SettingValue;
/// Turns a typed value into the text written to disk.
pub type Formatter = fn(&SettingValue) -> String;

pub fn validate_string(raw: &str) -> SettingValue {
    SettingValue::Str(raw.to_string())
}

/// Case-insensitive `true`/`false`; anything else is `false`.
pub fn validate_bool(raw: &str) -> SettingValue {
    let raw = raw.trim();
    SettingValue::Bool(raw.eq_ignore_ascii_case("true"))
}

pub fn validate_int(raw: &str) -> SettingValue {
    SettingValue::Int(raw.trim().parse().unwrap_or(0))
}

pub fn validate_float(raw: &str) -> SettingValue {
    SettingValue::Float(raw.trim().parse().unwrap_or(0.0))
}

pub fn format_std(value: &SettingValue) -> String {
    value.to_string()
}

#[derive(Debug, Clone)]
struct Setting {
    file: String,
    section: String,
    key: String,
    value: SettingValue,
    default: SettingValue,
    validate: Validator,
    format: Formatter,
}

/// Registered settings keyed by dotted name.
#[derive(Resource, Debug, Clone)]
pub struct Settings {
    dir: PathBuf,
    entries: FxHashMap<String, Setting>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_DIR)
    }
}

impl Settings {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            entries: FxHashMap::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the INI file backing a file group.
    pub fn file_path(&self, file: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", file, CONFIG_SUFFIX))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Register a setting and read its current value from disk.
    ///
    /// A key absent from the file takes `default`; a present key goes through
    /// `validate`. Fails for names without a dot, for names registered twice
    /// and when the settings directory cannot be created or the file parsed.
    pub fn register(
        &mut self,
        file: &str,
        name: &str,
        default: impl Into<SettingValue>,
        validate: Validator,
        format: Formatter,
    ) -> Result<(), String> {
        let (section, key) = split_name(name)?;
        if self.entries.contains_key(name) {
            return Err(format!("Setting '{}' is already registered", name));
        }
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create settings directory {:?}: {}", self.dir, e))?;

        let default = default.into();
        let path = self.file_path(file);
        let stored = if path.exists() {
            let mut ini = settings_ini();
            ini.load(&path)
                .map_err(|e| format!("Failed to load settings file {:?}: {}", path, e))?;
            ini.get(section, key)
        } else {
            None
        };
        let value = match stored {
            Some(raw) => validate(&raw),
            None => default.clone(),
        };
        debug!("Registered setting {} = {} ({})", name, value, file);

        self.entries.insert(
            name.to_string(),
            Setting {
                file: file.to_string(),
                section: section.to_string(),
                key: key.to_string(),
                value,
                default,
                validate,
                format,
            },
        );
        Ok(())
    }

    /// Write every setting back to its file.
    ///
    /// Existing files are loaded first so keys this store does not know
    /// about survive.
    pub fn save_all(&self) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create settings directory {:?}: {}", self.dir, e))?;

        let mut by_file: BTreeMap<&str, Vec<&Setting>> = BTreeMap::new();
        for setting in self.entries.values() {
            by_file.entry(setting.file.as_str()).or_default().push(setting);
        }

        for (file, settings) in by_file {
            let path = self.file_path(file);
            let mut ini = settings_ini();
            if path.exists() {
                ini.load(&path)
                    .map_err(|e| format!("Failed to load settings file {:?}: {}", path, e))?;
            }
            for setting in settings {
                ini.set(
                    &setting.section,
                    &setting.key,
                    Some((setting.format)(&setting.value)),
                );
            }
            ini.write(&path)
                .map_err(|e| format!("Failed to save settings file {:?}: {}", path, e))?;
            info!("Saved settings to {:?}", path);
        }
        Ok(())
    }

    /// Replace a setting's value, passing its text form through the validator.
    pub fn update_setting(&mut self, name: &str, value: impl fmt::Display) -> Result<(), String> {
        let setting = self
            .entries
            .get_mut(name)
            .ok_or_else(|| format!("Unknown setting '{}'", name))?;
        setting.value = (setting.validate)(&value.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&SettingValue, String> {
        self.setting(name).map(|s| &s.value)
    }

    pub fn get_default(&self, name: &str) -> Result<&SettingValue, String> {
        self.setting(name).map(|s| &s.default)
    }

    pub fn get_string(&self, name: &str) -> Result<String, String> {
        as_string(name, self.get(name)?)
    }

    pub fn get_string_default(&self, name: &str) -> Result<String, String> {
        as_string(name, self.get_default(name)?)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, String> {
        as_bool(name, self.get(name)?)
    }

    pub fn get_bool_default(&self, name: &str) -> Result<bool, String> {
        as_bool(name, self.get_default(name)?)
    }

    pub fn get_int(&self, name: &str) -> Result<i32, String> {
        as_int(name, self.get(name)?)
    }

    pub fn get_int_default(&self, name: &str) -> Result<i32, String> {
        as_int(name, self.get_default(name)?)
    }

    pub fn get_float(&self, name: &str) -> Result<f32, String> {
        as_float(name, self.get(name)?)
    }

    pub fn get_float_default(&self, name: &str) -> Result<f32, String> {
        as_float(name, self.get_default(name)?)
    }

    fn setting(&self, name: &str) -> Result<&Setting, String> {
        self.entries
            .get(name)
            .ok_or_else(|| format!("Unknown setting '{}'", name))
    }
}

/// Case-keeping parser that treats `#` and `;` as part of the value.
fn settings_ini() -> Ini {
    let mut ini = Ini::new_cs();
    ini.set_comment_symbols(&[]);
    ini
}

/// Split `section.key` at the first dot.
fn split_name(name: &str) -> Result<(&str, &str), String> {
    name.split_once('.')
        .ok_or_else(|| format!("Setting name '{}' must contain a dot (section.key)", name))
}

fn type_error(name: &str, wanted: &str, value: &SettingValue) -> String {
    format!("Setting '{}' is not a {} (found {:?})", name, wanted, value)
}

fn as_string(name: &str, value: &SettingValue) -> Result<String, String> {
    match value {
        SettingValue::Str(s) => Ok(s.clone()),
        other => Err(type_error(name, "string", other)),
    }
}

fn as_bool(name: &str, value: &SettingValue) -> Result<bool, String> {
    match value {
        SettingValue::Bool(b) => Ok(*b),
        other => Err(type_error(name, "bool", other)),
    }
}

fn as_int(name: &str, value: &SettingValue) -> Result<i32, String> {
    match value {
        SettingValue::Int(i) => Ok(*i),
        other => Err(type_error(name, "int", other)),
    }
}

fn as_float(name: &str, value: &SettingValue) -> Result<f32, String> {
    match value {
        SettingValue::Float(v) => Ok(*v),
        other => Err(type_error(name, "float", other)),
    }
}
