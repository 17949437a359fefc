//! Harness settings read from the process environment.

use std::path::PathBuf;

use reqcheck_application::PAGE_NUMBERS;
use thiserror::Error;

/// Selects the environment label (unset or blank means `prod`).
pub const ENV_VAR: &str = "REQCHECK_ENV";
/// Directory holding `<label>.properties` resources.
pub const RESOURCES_DIR_VAR: &str = "REQCHECK_RESOURCES_DIR";
/// Comma separated page numbers overriding the default sequence.
pub const PAGES_VAR: &str = "REQCHECK_PAGES";
/// Output format of the final report: `text` (default) or `json`.
pub const REPORT_VAR: &str = "REQCHECK_REPORT";

/// Default resources directory, relative to the working directory.
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Invalid harness settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A page list entry is not a non-negative integer.
    #[error("REQCHECK_PAGES entry {entry:?} is not a page number")]
    InvalidPage {
        /// The offending entry.
        entry: String,
    },

    /// The page list holds separators but no page numbers.
    #[error("REQCHECK_PAGES lists no page numbers")]
    EmptyPages,

    /// The report format is not recognised.
    #[error("REQCHECK_REPORT must be 'text' or 'json', got {0:?}")]
    InvalidReportFormat(String),
}

/// How the binary prints the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line per check and a summary line.
    #[default]
    Text,
    /// The full report as stable JSON.
    Json,
}

/// Everything the harness needs before it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessSettings {
    /// Raw environment selection, resolved later by the configurator.
    pub environment: Option<String>,
    /// Directory the environment resources are read from.
    pub resources_dir: PathBuf,
    /// Page numbers each check runs for, in order.
    pub pages: Vec<u32>,
    /// Report output format.
    pub report_format: ReportFormat,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            environment: None,
            resources_dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            pages: PAGE_NUMBERS.to_vec(),
            report_format: ReportFormat::Text,
        }
    }
}

impl HarnessSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `REQCHECK_PAGES` or `REQCHECK_REPORT` is malformed,
    /// or if `REQCHECK_PAGES` names no page at all.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns an error if the page list or the report format is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = Self::default();

        let resources_dir = lookup(RESOURCES_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map_or(defaults.resources_dir, PathBuf::from);

        let pages = match lookup(PAGES_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_pages(&raw)?,
            _ => defaults.pages,
        };

        let report_format = match lookup(REPORT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => ReportFormat::Text,
            Some("json") => ReportFormat::Json,
            Some(other) => return Err(SettingsError::InvalidReportFormat(other.to_string())),
        };

        Ok(Self {
            environment: lookup(ENV_VAR),
            resources_dir,
            pages,
            report_format,
        })
    }

    /// Sets the environment selection.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the resources directory.
    #[must_use]
    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = dir.into();
        self
    }

    /// Sets the page sequence.
    #[must_use]
    pub fn with_pages(mut self, pages: impl IntoIterator<Item = u32>) -> Self {
        self.pages = pages.into_iter().collect();
        self
    }
}

fn parse_pages(raw: &str) -> Result<Vec<u32>, SettingsError> {
    let pages = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse().map_err(|_| SettingsError::InvalidPage {
                entry: entry.to_string(),
            })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    if pages.is_empty() {
        return Err(SettingsError::EmptyPages);
    }
    Ok(pages)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<HarnessSettings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        HarnessSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings, HarnessSettings::default());
        assert_eq!(settings.pages, vec![1, 2]);
        assert_eq!(settings.resources_dir, PathBuf::from("resources"));
        assert_eq!(settings.environment, None);
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("REQCHECK_ENV", "staging"),
            ("REQCHECK_RESOURCES_DIR", "/etc/reqcheck"),
            ("REQCHECK_PAGES", " 2, 3 ,"),
            ("REQCHECK_REPORT", "json"),
        ])
        .unwrap();

        assert_eq!(settings.environment.as_deref(), Some("staging"));
        assert_eq!(settings.resources_dir, PathBuf::from("/etc/reqcheck"));
        assert_eq!(settings.pages, vec![2, 3]);
        assert_eq!(settings.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let settings = settings(&[("REQCHECK_RESOURCES_DIR", " "), ("REQCHECK_PAGES", "")]).unwrap();
        assert_eq!(settings.resources_dir, PathBuf::from("resources"));
        assert_eq!(settings.pages, vec![1, 2]);
    }

    #[test]
    fn test_invalid_page() {
        let err = settings(&[("REQCHECK_PAGES", "1,two")]).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidPage {
                entry: "two".to_string()
            }
        );
        assert_eq!(err.to_string(), "REQCHECK_PAGES entry \"two\" is not a page number");
    }

    #[test]
    fn test_separator_only_pages_are_rejected() {
        for raw in [",", " , ", ",,"] {
            let err = settings(&[("REQCHECK_PAGES", raw)]).unwrap_err();
            assert_eq!(err, SettingsError::EmptyPages, "pages {raw:?}");
        }
        assert_eq!(
            SettingsError::EmptyPages.to_string(),
            "REQCHECK_PAGES lists no page numbers"
        );
    }

    #[test]
    fn test_invalid_report_format() {
        let err = settings(&[("REQCHECK_REPORT", "xml")]).unwrap_err();
        assert_eq!(err, SettingsError::InvalidReportFormat("xml".to_string()));
    }
}
