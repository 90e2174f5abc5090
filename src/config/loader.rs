//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{MapError, MapResult};

use super::types::{EmptyPlanPolicy, MapperConfig};

pub use crate::domain::value_objects::ConfigWarning;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MapResult<(MapperConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: MapperConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `path` if given, otherwise defaults; env overrides win either way
pub fn load_or_default(path: Option<&Path>) -> MapResult<(MapperConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = match path {
        Some(path) => load_with_warnings(path)?,
        None => (MapperConfig::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (FIELDMAP_* prefix)
pub fn with_env_overrides(mut config: MapperConfig) -> MapperConfig {
    // FIELDMAP_EMPTY_PLAN
    if let Ok(policy) = std::env::var("FIELDMAP_EMPTY_PLAN") {
        match EmptyPlanPolicy::parse(&policy) {
            Some(policy) => config.compiler.empty_plan = policy,
            None => tracing::warn!(value = %policy, "ignoring unknown FIELDMAP_EMPTY_PLAN"),
        }
    }

    // FIELDMAP_REPORT_SKIPPED
    if let Ok(val) = std::env::var("FIELDMAP_REPORT_SKIPPED") {
        match parse_flag(&val) {
            Some(flag) => config.compiler.report_skipped = flag,
            None => tracing::warn!(value = %val, "ignoring non-boolean FIELDMAP_REPORT_SKIPPED"),
        }
    }

    // FIELDMAP_CACHE_CAPACITY
    if let Ok(val) = std::env::var("FIELDMAP_CACHE_CAPACITY") {
        match val.trim().parse() {
            Ok(capacity) => config.cache.initial_capacity = capacity,
            Err(_) => tracing::warn!(value = %val, "ignoring non-numeric FIELDMAP_CACHE_CAPACITY"),
        }
    }

    config
}

/// Accepts `true|false|1|0`, case-insensitive, surrounding whitespace ignored
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Line of the first `key = ...` assignment; table headers never match
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compiler",
        "empty_plan",
        "report_skipped",
        "cache",
        "initial_capacity",
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
        // A known key in the wrong table has nothing better to suggest
        Some((candidate, dist)) if dist > 0 && dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

/// Edit distance over chars, keeping a single row of the DP table
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
