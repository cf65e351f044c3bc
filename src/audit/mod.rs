//! Activity log
//!
//! Fare changes and other administrative actions append an entry to a
//! line-delimited JSON activity log, mirroring the system log the upstream
//! back office keeps. Each line is one complete JSON object, flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FleetError, FleetResult};

/// One recorded administrative activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the activity happened
    pub timestamp: DateTime<Utc>,
    /// What was done, e.g. "Updated base fare to ₱1,000 and discount to 20%"
    pub activity: String,
    /// Who did it (full name or account identifier)
    pub performed_by: String,
    /// Display role, when the actor's role maps to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Map an account role to its activity-log display role
///
/// Roles outside the mapping are recorded without a role.
pub fn display_role(role: &str) -> Option<&'static str> {
    match role {
        "Admin" => Some("System Admin"),
        "Super" => Some("Super Admin"),
        _ => None,
    }
}

/// Appends activity entries to a JSONL log file
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Create a logger that writes to the given path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record one activity
    pub fn log_activity(
        &self,
        activity: impl Into<String>,
        performed_by: impl Into<String>,
        role: Option<&str>,
    ) -> FleetResult<()> {
        let entry = ActivityEntry {
            timestamp: Utc::now(),
            activity: activity.into(),
            performed_by: performed_by.into(),
            role: role.and_then(display_role).map(String::from),
        };
        self.append(&entry)
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> FleetResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FleetError::Audit(format!("Failed to open activity log: {}", e)))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FleetError::Audit(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                FleetError::Audit(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    fn append(&self, entry: &ActivityEntry) -> FleetResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FleetError::Audit(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FleetError::Audit(format!("Failed to serialize activity entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FleetError::Audit(format!("Failed to write activity entry: {}", e)))?;

        file.flush()
            .map_err(|e| FleetError::Audit(format!("Failed to flush activity log: {}", e)))
    }
}
