//! Configuration loading

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PieMenuError, PieResult};

use super::types::{Config, GeometryConfig};

/// What is wrong with a configuration key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    UnknownKey { suggestion: Option<String> },
    NotPositive(i64),
    TooLarge { value: i64, max: i32 },
    NotANumber(String),
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    /// File path or environment variable the value came from
    pub source: String,
    pub line: Option<usize>,
    pub problem: Problem,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match self.line {
            Some(line) => format!("{}:{}", self.source, line),
            None => self.source.clone(),
        };
        match &self.problem {
            Problem::UnknownKey { suggestion } => {
                write!(f, "{}: unknown key `{}`", location, self.key)?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean `{}`?)", suggestion)?;
                }
                Ok(())
            }
            Problem::NotPositive(value) => write!(
                f,
                "{}: `{}` must be positive, got {}; keeping the default",
                location, self.key, value
            ),
            Problem::TooLarge { value, max } => write!(
                f,
                "{}: `{}` must be at most {}, got {}; keeping the default",
                location, self.key, max, value
            ),
            Problem::NotANumber(value) => write!(
                f,
                "{}: `{}` is not a number: {:?}; keeping the default",
                location, self.key, value
            ),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PieResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PieMenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PieMenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let source = path.display().to_string();
    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                problem: Problem::UnknownKey {
                    suggestion: suggest_key(&key),
                },
                key,
                source: source.clone(),
            }
        })
        .collect();

    for mut warning in config.sanitize(&source) {
        warning.line = find_line_number(&content, &warning.key);
        warnings.push(warning);
    }

    Ok((config, warnings))
}

/// Default location of the user config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("piemenu").join("config.toml"))
}

/// Load from `explicit`, the user config, or defaults, with environment
/// overrides. Keys set in `explicit` are not overridden.
pub fn resolve(explicit: Option<&Path>) -> PieResult<(Config, Vec<ConfigWarning>)> {
    resolve_with(explicit, user_config_path(), |key| std::env::var(key).ok())
}

pub(crate) fn resolve_with(
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> PieResult<(Config, Vec<ConfigWarning>)> {
    // An explicit file must load and outranks the environment; the user
    // file is best effort and ranks below it
    if let Some(path) = explicit {
        log::info!("loading config from {}", path.display());
        let (config, mut warnings) = load_with_warnings(path)?;
        let pinned = keys_in_file(path);
        let (config, env_warnings) = apply_env(config, get_env, &pinned);
        warnings.extend(env_warnings);
        return Ok((config, warnings));
    }

    let (config, mut warnings) = match user_config.filter(|path| path.exists()) {
        Some(path) => match load_with_warnings(&path) {
            Ok(loaded) => {
                log::info!("loaded config from {}", path.display());
                loaded
            }
            Err(err) => {
                log::warn!("ignoring user config: {}", err);
                (Config::default(), Vec::new())
            }
        },
        None => {
            log::info!("no config file, using defaults");
            (Config::default(), Vec::new())
        }
    };

    let (config, env_warnings) = with_env_overrides(config, get_env);
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

/// Keys a config file sets, as `section.key`
fn keys_in_file(path: &Path) -> HashSet<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return HashSet::new();
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return HashSet::new();
    };
    table
        .iter()
        .filter_map(|(section, value)| value.as_table().map(|keys| (section, keys)))
        .flat_map(|(section, keys)| keys.keys().map(move |key| format!("{section}.{key}")))
        .collect()
}

/// Apply environment variable overrides (PIEMENU_* prefix)
pub fn with_env_overrides(
    config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    apply_env(config, get_env, &HashSet::new())
}

/// Apply overrides except for the `pinned` keys
fn apply_env(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    pinned: &HashSet<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    for (key, field) in config.geometry.fields_mut() {
        if pinned.contains(&format!("geometry.{key}")) {
            continue;
        }
        let var = env_name(key);
        let Some(raw) = get_env(&var) else {
            continue;
        };
        let checked = match raw.trim().parse::<i64>() {
            Ok(value) => i32::try_from(value)
                .map_err(|_| match value {
                    value if value <= 0 => Problem::NotPositive(value),
                    _ => Problem::TooLarge {
                        value,
                        max: GeometryConfig::max_value(key),
                    },
                })
                .and_then(|value| GeometryConfig::check(key, value)),
            Err(_) => Err(Problem::NotANumber(raw)),
        };
        let problem = match checked {
            Ok(value) => {
                *field = value;
                continue;
            }
            Err(problem) => problem,
        };
        warnings.push(ConfigWarning {
            key: key.to_string(),
            source: var,
            line: None,
            problem,
        });
    }

    for (key, field) in config.style.fields_mut() {
        if pinned.contains(&format!("style.{key}")) {
            continue;
        }
        if let Some(value) = get_env(&env_name(key)) {
            *field = value;
        }
    }

    (config, warnings)
}

fn env_name(key: &str) -> String {
    format!("PIEMENU_{}", key.to_uppercase())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "geometry",
        "style",
        "border_width",
        "separator_width",
        "padding",
        "item_width",
        "diameter",
        "font",
        "background",
        "foreground",
        "selbackground",
        "selforeground",
        "separator",
        "border",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
