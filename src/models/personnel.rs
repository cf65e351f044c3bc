//! Personnel roster model
//!
//! The roster is a separate export from the fuel logs. The report's
//! personnel count comes from here, never from the filtered log set.

use serde::{Deserialize, Serialize};

/// Roles counted toward the report's personnel statistic
const COUNTED_ROLES: [&str; 2] = ["Driver", "Reliever"];

/// A person on the fleet roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personnel {
    /// First name
    #[serde(default, alias = "firstName")]
    pub first_name: String,

    /// Middle name (often empty)
    #[serde(default, alias = "middleName")]
    pub middle_name: String,

    /// Last name
    #[serde(default, alias = "lastName")]
    pub last_name: String,

    /// Role label (e.g. "Driver", "Reliever", "Admin")
    #[serde(default)]
    pub role: String,
}

impl Personnel {
    /// Full display name: first, optional middle, last
    pub fn full_name(&self) -> String {
        let parts = [&self.first_name, &self.middle_name, &self.last_name];
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether this person counts toward the drivers/relievers statistic
    pub fn is_driver_or_reliever(&self) -> bool {
        COUNTED_ROLES.contains(&self.role.as_str())
    }
}

/// Count roster entries with a Driver or Reliever role
pub fn driver_reliever_count(roster: &[Personnel]) -> usize {
    roster.iter().filter(|p| p.is_driver_or_reliever()).count()
}
