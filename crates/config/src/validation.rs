//! Resolved settings validation utilities

use crate::schema::ResolvedConfig;
use serde::Serialize;
use std::fmt;
use types::{
    utils::{is_boolean_literal, is_http_url},
    Setting, ALL_SETTINGS, NEXUS_PASSWORD, NEXUS_URL, NEXUS_USER, NO_NEXUS, PROXY_SETTINGS,
};

/// Settings validator
///
/// Unlike the repository configurator, which stops at the first missing
/// setting, the validator collects every problem it finds.
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate resolved settings
    pub fn validate(config: &ResolvedConfig) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::validate_no_nexus(config, &mut report);

        if config.no_nexus() {
            Self::validate_unused_credentials(config, &mut report);
        } else {
            Self::validate_proxy_settings(config, &mut report);
        }

        Self::validate_blank_values(config, &mut report);

        report
    }

    fn validate_no_nexus(config: &ResolvedConfig, report: &mut ValidationReport) {
        if let Some(value) = config.setting(&NO_NEXUS) {
            if !is_boolean_literal(value) {
                report.push(
                    Severity::Warning,
                    &NO_NEXUS,
                    format!("'{}' is not a boolean, treating {} as false", value, NO_NEXUS),
                );
            }
        }
    }

    fn validate_proxy_settings(config: &ResolvedConfig, report: &mut ValidationReport) {
        for setting in PROXY_SETTINGS {
            if !config.is_set(&setting) {
                let aliases = setting.env_aliases.join(" or ");
                report.push(
                    Severity::Error,
                    &setting,
                    format!(
                        "{} is false but {} is not set (set the property or {})",
                        NO_NEXUS, setting, aliases
                    ),
                );
            }
        }

        if let Some(url) = config.setting(&NEXUS_URL) {
            if !url.trim().is_empty() && !is_http_url(url) {
                report.push(
                    Severity::Warning,
                    &NEXUS_URL,
                    format!("'{}' should start with http:// or https://", url),
                );
            }
        }
    }

    fn validate_unused_credentials(config: &ResolvedConfig, report: &mut ValidationReport) {
        for setting in [NEXUS_URL, NEXUS_USER, NEXUS_PASSWORD] {
            if config.is_set(&setting) {
                report.push(
                    Severity::Warning,
                    &setting,
                    format!("{} is true, {} is ignored", NO_NEXUS, setting),
                );
            }
        }
    }

    fn validate_blank_values(config: &ResolvedConfig, report: &mut ValidationReport) {
        for setting in ALL_SETTINGS {
            if let Some(value) = config.setting(&setting) {
                if value.trim().is_empty() {
                    report.push(Severity::Warning, &setting, "value is blank");
                }
            }
        }
    }
}

/// How serious a validation issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The conventions cannot be applied with these settings
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.pad("error"),
            Severity::Warning => f.pad("warning"),
        }
    }
}

/// A problem found with one setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub setting: &'static str,
    pub message: String,
}

/// Every issue found with a set of resolved settings, in discovery order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, setting: &Setting, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity,
            setting: setting.name,
            message: message.into(),
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn summary(&self) -> String {
        format!(
            "Validation: {} errors, {} warnings",
            self.errors().count(),
            self.warnings().count()
        )
    }
}
