//! Weekly fighter pool
//!
//! Each week's pool is a JSON array of fighters stored as
//! `pool-week-XX.json` (zero-padded week). A missing or unreadable file, or
//! one that is not a JSON array, falls back to the fixed eight-fighter roster
//! so a week can always be played. Individual bad records are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::models::Fighter;

/// `pool-week-07.json` for week 7.
pub fn pool_file_name(week: u32) -> String {
    format!("pool-week-{week:02}.json")
}

pub fn pool_file_path(dir: &Path, week: u32) -> PathBuf {
    dir.join(pool_file_name(week))
}

/// Roster used when a week's pool file is unavailable.
pub fn fallback_roster() -> Vec<Fighter> {
    vec![
        Fighter::new("Sean Strickland", 185, 78.0, "28-5", "Available"),
        Fighter::new("Bo Nickal", 185, 72.0, "5-0", "Prospect"),
        Fighter::new("Dustin Poirier", 155, 88.0, "29-8", "Main Event Only"),
        Fighter::new("Max Holloway", 145, 90.0, "25-7", "Available"),
        Fighter::new("Khamzat Chimaev", 185, 92.0, "13-0", "Available"),
        Fighter::new("Islam Makhachev", 155, 95.0, "25-1", "Available"),
        Fighter::new("Jon Jones", 265, 98.0, "27-1", "Main Event Only"),
        Fighter::new("Alexander Volkanovski", 145, 94.0, "26-3", "Available"),
    ]
}

/// Load the pool for `week` from `dir`, falling back to [`fallback_roster`].
///
/// Only week 0 is an error; missing files, unparseable JSON and non-array
/// documents are logged and replaced. Records that do not describe a fighter
/// are dropped one by one without discarding the rest of the file.
pub fn load_weekly_pool(dir: &Path, week: u32) -> Result<Vec<Fighter>> {
    if week == 0 {
        return Err(CoreError::InvalidWeek { week });
    }

    let path = pool_file_path(dir, week);
    match read_pool_file(&path) {
        Ok(pool) => {
            debug!(week, fighters = pool.len(), path = %path.display(), "weekly pool loaded");
            Ok(pool)
        }
        Err(e) => {
            warn!(week, path = %path.display(), error = %e, "failed to load weekly pool, using fallback");
            Ok(fallback_roster())
        }
    }
}

fn read_pool_file(path: &Path) -> Result<Vec<Fighter>> {
    let content = fs::read_to_string(path)?;
    let records = match serde_json::from_str::<Value>(&content)? {
        Value::Array(records) => records,
        other => {
            return Err(CoreError::Deserialization(format!(
                "expected an array of fighters, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut pool = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Fighter>(record) {
            Ok(fighter) => pool.push(fighter),
            Err(e) => warn!(path = %path.display(), index, error = %e, "skipping malformed fighter record"),
        }
    }
    Ok(pool)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Case-sensitive lookup by name.
pub fn find_fighter<'a>(pool: &'a [Fighter], name: &str) -> Option<&'a Fighter> {
    pool.iter().find(|f| f.name == name)
}
