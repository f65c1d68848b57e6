//! Configuration validation utilities.
//!
//! Provides validation for assembled configurations to detect common
//! issues:
//! - Missing color space references
//! - Duplicate color space names
//! - Displays without views
//! - Active lists referencing unknown displays or views
//!
//! # Example
//!
//! ```
//! use aces_config::{Config, validate};
//!
//! let config = Config::new();
//! let issues = validate::check(&config);
//!
//! for issue in &issues {
//!     println!("{}: {}", issue.severity, issue.message);
//! }
//! ```

use std::collections::HashSet;

use crate::config::Config;
use crate::role::names;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning - config works but may have issues.
    Warning,
    /// Error - config has problems that may cause failures.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A validation issue found in the config.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Severity level.
    pub severity: Severity,
    /// Issue category.
    pub category: IssueCategory,
    /// Human-readable message.
    pub message: String,
    /// Related element (color space name, role, etc.).
    pub context: Option<String>,
}

/// Categories of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    /// Missing color space reference.
    MissingColorSpace,
    /// Missing role definition.
    MissingRole,
    /// Missing display/view.
    MissingDisplay,
    /// Invalid transform configuration.
    InvalidTransform,
    /// Duplicate definition.
    Duplicate,
}

/// Validates a config and returns all issues found.
pub fn check(config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_roles(config, &mut issues);
    check_displays(config, &mut issues);
    check_colorspaces(config, &mut issues);
    check_file_rules(config, &mut issues);

    issues
}

/// Checks role definitions.
fn check_roles(config: &Config, issues: &mut Vec<Issue>) {
    if config.roles().scene_linear().is_none() {
        issues.push(Issue {
            severity: Severity::Warning,
            category: IssueCategory::MissingRole,
            message: format!("recommended role '{}' is not defined", names::SCENE_LINEAR),
            context: Some(names::SCENE_LINEAR.to_string()),
        });
    }

    // Check that all role targets exist
    for (role, cs_name) in config.roles().iter() {
        if config.colorspace(cs_name).is_none() {
            issues.push(Issue {
                severity: Severity::Error,
                category: IssueCategory::MissingColorSpace,
                message: format!(
                    "role '{}' references non-existent color space '{}'",
                    role, cs_name
                ),
                context: Some(role.to_string()),
            });
        }
    }
}

/// Checks display/view definitions and the active lists.
fn check_displays(config: &Config, issues: &mut Vec<Issue>) {
    if config.displays().is_empty() {
        issues.push(Issue {
            severity: Severity::Warning,
            category: IssueCategory::MissingDisplay,
            message: "no displays defined".to_string(),
            context: None,
        });
        return;
    }

    for display in config.displays().displays() {
        if display.views().is_empty() {
            issues.push(Issue {
                severity: Severity::Warning,
                category: IssueCategory::MissingDisplay,
                message: format!("display '{}' has no views", display.name()),
                context: Some(display.name().to_string()),
            });
        }

        for view in display.views() {
            if config.colorspace(view.colorspace()).is_none() {
                issues.push(Issue {
                    severity: Severity::Error,
                    category: IssueCategory::MissingColorSpace,
                    message: format!(
                        "view '{}' in display '{}' references non-existent color space '{}'",
                        view.name(),
                        display.name(),
                        view.colorspace()
                    ),
                    context: Some(format!("{}:{}", display.name(), view.name())),
                });
            }
        }
    }

    for active in config.active_displays() {
        if config.displays().display(active).is_none() {
            issues.push(Issue {
                severity: Severity::Error,
                category: IssueCategory::MissingDisplay,
                message: format!("active display '{}' is not defined", active),
                context: Some(active.to_string()),
            });
        }
    }

    for active in config.active_views() {
        let known = config
            .displays()
            .displays()
            .iter()
            .any(|d| d.view(active).is_some());
        if !known {
            issues.push(Issue {
                severity: Severity::Warning,
                category: IssueCategory::MissingDisplay,
                message: format!("active view '{}' does not appear in any display", active),
                context: Some(active.to_string()),
            });
        }
    }
}

/// Checks color space definitions.
fn check_colorspaces(config: &Config, issues: &mut Vec<Issue>) {
    let mut names: HashSet<&str> = HashSet::new();

    for cs in config.colorspaces() {
        // Check for duplicates
        if !names.insert(cs.name()) {
            issues.push(Issue {
                severity: Severity::Error,
                category: IssueCategory::Duplicate,
                message: format!("duplicate color space name: '{}'", cs.name()),
                context: Some(cs.name().to_string()),
            });
        }

        // Check data color spaces don't have transforms
        if cs.is_data() && (cs.to_reference().is_some() || cs.from_reference().is_some()) {
            issues.push(Issue {
                severity: Severity::Warning,
                category: IssueCategory::InvalidTransform,
                message: format!(
                    "data color space '{}' has transforms defined (will be ignored)",
                    cs.name()
                ),
                context: Some(cs.name().to_string()),
            });
        }
    }
}

/// Checks that file rules reference existing color spaces.
fn check_file_rules(config: &Config, issues: &mut Vec<Issue>) {
    for rule in config.file_rules() {
        if config.colorspace(&rule.colorspace).is_none() {
            issues.push(Issue {
                severity: Severity::Error,
                category: IssueCategory::MissingColorSpace,
                message: format!(
                    "file rule '{}' references non-existent color space '{}'",
                    rule.name, rule.colorspace
                ),
                context: Some(rule.name.to_string()),
            });
        }
    }
}

/// Returns true if there are any errors.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

/// Returns true if there are any warnings or errors.
pub fn has_warnings(issues: &[Issue]) -> bool {
    issues
        .iter()
        .any(|i| i.severity == Severity::Warning || i.severity == Severity::Error)
}
