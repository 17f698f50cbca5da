//! Validation of raw model output into page artifacts.
//!
//! Model output is untrusted: it must parse as a JSON object carrying the
//! two string fields of the deployment's [`OutputProfile`] before anything
//! is persisted or returned.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::CoreError;

/// Matches the closing head tag, case-insensitively.
static HEAD_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head>").expect("valid regex"));

/// Matches the HTML5 doctype declaration, case-insensitively.
static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!DOCTYPE html>").expect("valid regex"));

// ---------------------------------------------------------------------------
// Output profile
// ---------------------------------------------------------------------------

/// Which pair of artifacts the model is asked to produce.
///
/// Chosen once per deployment; the prompt builder and the validator must
/// agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputProfile {
    /// A React + Tailwind component plus a standalone HTML preview.
    #[default]
    React,
    /// A static HTML page plus a separate CSS stylesheet.
    Static,
}

impl OutputProfile {
    /// The two JSON field names the model must return, in the order
    /// `(markup-side, component-side)`.
    pub fn required_fields(self) -> [&'static str; 2] {
        match self {
            OutputProfile::React => ["previewHtml", "reactComponent"],
            OutputProfile::Static => ["html", "css"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputProfile::React => "react",
            OutputProfile::Static => "static",
        }
    }
}

impl fmt::Display for OutputProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputProfile {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "react" => Ok(OutputProfile::React),
            "static" => Ok(OutputProfile::Static),
            other => Err(CoreError::Validation(format!(
                "Unknown generation profile '{other}' (expected 'react' or 'static')"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// Validated generation output, normalized to the persisted column pair.
///
/// For the static profile `react` carries the raw stylesheet and `html` the
/// page with that stylesheet inlined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArtifacts {
    pub html: String,
    pub react: String,
}

/// Parse and validate raw model output for the given profile.
///
/// Fails with [`CoreError::LlmInvalidJson`] when the text is not JSON, and
/// with [`CoreError::LlmMissingFields`] when it is not an object or either
/// required field is absent or not a string.
pub fn parse_page_output(profile: OutputProfile, raw: &str) -> Result<PageArtifacts, CoreError> {
    let expected = profile.required_fields();
    let value: Value = serde_json::from_str(raw.trim()).map_err(|_| CoreError::LlmInvalidJson {
        raw: raw.to_string(),
        expected,
    })?;

    let [markup_field, component_field] = expected;
    let markup = string_field(&value, markup_field);
    let component = string_field(&value, component_field);

    let (markup, component) = match (markup, component) {
        (Some(m), Some(c)) => (m, c),
        (m, c) => {
            let mut missing = Vec::with_capacity(2);
            if m.is_none() {
                missing.push(markup_field);
            }
            if c.is_none() {
                missing.push(component_field);
            }
            return Err(CoreError::LlmMissingFields { missing });
        }
    };

    Ok(match profile {
        OutputProfile::React => PageArtifacts {
            html: markup.to_string(),
            react: component.to_string(),
        },
        OutputProfile::Static => PageArtifacts {
            html: inline_stylesheet(markup, component),
            react: component.to_string(),
        },
    })
}

fn string_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.as_object()?.get(field)?.as_str()
}

/// Embed `css` into `html` as a `<style>` block so the page renders styled
/// without the separate stylesheet.
///
/// Inserted before the first `</head>`; failing that right after the
/// doctype; failing that at the very start.
pub fn inline_stylesheet(html: &str, css: &str) -> String {
    if let Some(m) = HEAD_CLOSE_RE.find(html) {
        return format!(
            "{}  <style>\n{css}\n  </style>\n{}",
            &html[..m.start()],
            &html[m.start()..]
        );
    }
    if let Some(m) = DOCTYPE_RE.find(html) {
        return format!(
            "{}\n<style>\n{css}\n</style>\n{}",
            &html[..m.end()],
            &html[m.end()..]
        );
    }
    format!("<style>\n{css}\n</style>\n{html}")
}
