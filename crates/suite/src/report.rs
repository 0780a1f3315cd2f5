//! Suite report types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a failed check blocks validation or is informational.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Per-field check counters. Created on the first check of a field and
/// kept for the rest of the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldStats {
    pub test_count: u32,
    pub fail_count: u32,
    pub warn_count: u32,
}

/// Aggregated result of one suite run.
///
/// Owned by a single run and handed to the caller by value once the suite
/// callback returns. The overall `test_count` / `fail_count` / `warn_count`
/// each equal the sum of the per-field counterparts; per-field statement
/// lists preserve check registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub name: String,
    pub has_errors: bool,
    pub has_warnings: bool,
    pub tests_performed: BTreeMap<String, FieldStats>,
    pub errors: BTreeMap<String, Vec<String>>,
    pub warnings: BTreeMap<String, Vec<String>>,
    pub fail_count: u32,
    pub warn_count: u32,
    pub test_count: u32,
    pub skipped: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_errors: false,
            has_warnings: false,
            tests_performed: BTreeMap::new(),
            errors: BTreeMap::new(),
            warnings: BTreeMap::new(),
            fail_count: 0,
            warn_count: 0,
            test_count: 0,
            skipped: Vec::new(),
        }
    }

    /// `true` when no error-severity failure was recorded. Warnings do not
    /// block validation.
    pub fn is_valid(&self) -> bool {
        !self.has_errors
    }

    /// Record a check excluded by the field filter. No counters move.
    pub(crate) fn record_skip(&mut self, field: &str) {
        self.skipped.push(field.to_string());
    }

    /// Count one executed check against `field`, pass or fail.
    pub(crate) fn record_test(&mut self, field: &str) {
        self.tests_performed.entry(field.to_string()).or_default().test_count += 1;
        self.test_count += 1;
    }

    /// Record a failed check's statement under its severity.
    pub(crate) fn record_failure(&mut self, field: &str, statement: &str, severity: Severity) {
        let stats = self.tests_performed.entry(field.to_string()).or_default();
        match severity {
            Severity::Error => {
                stats.fail_count += 1;
                self.fail_count += 1;
                self.has_errors = true;
                self.errors
                    .entry(field.to_string())
                    .or_default()
                    .push(statement.to_string());
            }
            Severity::Warning => {
                stats.warn_count += 1;
                self.warn_count += 1;
                self.has_warnings = true;
                self.warnings
                    .entry(field.to_string())
                    .or_default()
                    .push(statement.to_string());
            }
        }
    }
}
