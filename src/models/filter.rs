//! Report filter parameters
//!
//! Transient filter state applied to a fuel log snapshot: free-text search,
//! officer selection, and a date range over local calendar days.
//!
//! The date range keeps the upstream behavior exactly: a start date with no
//! end date means "that single day", not "from that day onward". The default
//! filter mode ("today") relies on this.

use chrono::{Datelike, Duration, NaiveDate};
use std::str::FromStr;

use crate::error::FleetError;
use crate::models::FuelLog;

/// Officer selection: the "all" sentinel or an exact officer name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OfficerFilter {
    /// Match every officer
    #[default]
    All,
    /// Match one officer name exactly (case-sensitive)
    Named(String),
}

impl OfficerFilter {
    /// Parse a CLI value; "all" (any casing) is the sentinel
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(s.trim().to_string())
        }
    }

    /// Check whether an officer name passes this filter
    pub fn matches(&self, officer: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => officer == name,
        }
    }
}

/// Filter parameters for the fuel report
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// Case-insensitive substring match against driver, officer, and vehicle
    pub search: String,
    /// Officer selection
    pub officer: OfficerFilter,
    /// Inclusive start day; with no end day this means exactly that day
    pub start_date: Option<NaiveDate>,
    /// Inclusive end day
    pub end_date: Option<NaiveDate>,
}

impl LogFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text (builder style)
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the officer filter (builder style)
    pub fn officer(mut self, officer: OfficerFilter) -> Self {
        self.officer = officer;
        self
    }

    /// Set the date bounds (builder style)
    pub fn date_bounds(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Check whether a log passes all three predicates
    pub fn matches(&self, log: &FuelLog) -> bool {
        self.matches_officer(log) && self.matches_search(log) && self.matches_date(log)
    }

    fn matches_officer(&self, log: &FuelLog) -> bool {
        self.officer.matches(&log.officer)
    }

    fn matches_search(&self, log: &FuelLog) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&log.driver, &log.officer, &log.vehicle]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_date(&self, log: &FuelLog) -> bool {
        // Logs with no derivable day pass the date predicate unconditionally.
        let Some(day) = log.occurred_day() else {
            return true;
        };

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => day >= start && day <= end,
            // Start with no end means that single day.
            (Some(start), None) => day == start,
            (None, Some(end)) => day <= end,
            (None, None) => true,
        }
    }
}

/// Quick date-range presets offered by the report command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Today only (start = today, no end)
    #[default]
    Today,
    /// Monday of the current week through today
    Week,
    /// First of the current month through today
    Month,
    /// Caller-supplied bounds
    Custom,
}

impl FilterMode {
    /// Resolve the preset to date bounds relative to `today`
    pub fn resolve(self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            Self::Today => (Some(today), None),
            Self::Week => (Some(week_start(today)), Some(today)),
            Self::Month => (Some(month_start(today)), Some(today)),
            Self::Custom => (None, None),
        }
    }
}

impl FromStr for FilterMode {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "custom" => Ok(Self::Custom),
            other => Err(FleetError::validation(format!(
                "Unknown filter mode '{}' (expected today, week, month, or custom)",
                other
            ))),
        }
    }
}

/// Monday of the week containing `day`
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// First day of the month containing `day`
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}
