//! Selectable options and the validated option set.
//!
//! A [`SelectOption`] is one entry of the selector. An [`OptionSet`] is the
//! ordered, finite list the control filters and navigates. The set enforces
//! value uniqueness when it is built, so every lookup by value downstream is
//! unambiguous.
//!
//! # File Formats
//!
//! Option sets can be loaded from TOML:
//!
//! ```toml
//! [[options]]
//! value = "a"
//! label = "Apple"
//!
//! [[options]]
//! value = "b"
//! label = "Banana"
//! disabled = true
//! description = "Out of season"
//! ```
//!
//! or from a JSON array (selected by the `.json` extension):
//!
//! ```json
//! [{ "value": "a", "label": "Apple" }, { "value": "b", "label": "Banana", "disabled": true }]
//! ```

use crate::domain::error::{AutoselectError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One selectable entry.
///
/// `value` is the identity of the option; `label` is what the user sees and
/// what the filter matches against. `icon`, `description` and `keywords` are
/// carried through to rendering untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extra search terms. Not consulted by the filter, which matches labels only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl SelectOption {
    /// Creates an enabled option with no decorations.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoselect::domain::SelectOption;
    ///
    /// let option = SelectOption::new("a", "Apple");
    /// assert_eq!(option.value, "a");
    /// assert!(!option.disabled);
    /// ```
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            icon: None,
            description: None,
            keywords: Vec::new(),
        }
    }

    /// Marks the option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if navigation and selection may land on this option.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Wrapper used by the TOML file format (`[[options]]` tables).
#[derive(Debug, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    options: Vec<SelectOption>,
}

/// Ordered option list with unique values.
///
/// The order is the display order; the filter never re-sorts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<SelectOption>,
}

impl OptionSet {
    /// Builds a set, rejecting duplicate values.
    ///
    /// # Errors
    ///
    /// Returns [`AutoselectError::DuplicateValue`] naming the first value that
    /// appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoselect::domain::{OptionSet, SelectOption};
    ///
    /// let duplicate = OptionSet::new(vec![
    ///     SelectOption::new("a", "Apple"),
    ///     SelectOption::new("a", "Avocado"),
    /// ]);
    /// assert!(duplicate.is_err());
    /// ```
    pub fn new(options: Vec<SelectOption>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.value.as_str()) {
                return Err(AutoselectError::DuplicateValue(option.value.clone()));
            }
        }
        Ok(Self { options })
    }

    /// Parses the inline configuration syntax.
    ///
    /// Entries are separated by `,`. Each entry is `value=Label`, or a bare
    /// word used as both value and label. A leading `!` disables the entry.
    ///
    /// # Errors
    ///
    /// Returns [`AutoselectError::DuplicateValue`] if two entries share a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoselect::domain::OptionSet;
    ///
    /// let set = OptionSet::parse_inline("a=Apple, !b=Banana, cherry").unwrap();
    /// assert_eq!(set.len(), 3);
    /// assert!(set.get(1).unwrap().disabled);
    /// assert_eq!(set.get(2).unwrap().label, "cherry");
    /// ```
    pub fn parse_inline(spec: &str) -> Result<Self> {
        let options = spec
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (disabled, entry) = entry
                    .strip_prefix('!')
                    .map_or((false, entry), |rest| (true, rest.trim_start()));
                let (value, label) = entry
                    .split_once('=')
                    .map_or((entry, entry), |(v, l)| (v.trim(), l.trim()));
                let option = SelectOption::new(value, label);
                if disabled {
                    option.disabled()
                } else {
                    option
                }
            })
            .collect();

        Self::new(options)
    }

    /// Loads a set from a TOML or JSON file.
    ///
    /// Files ending in `.json` are parsed as a JSON array of options; anything
    /// else is parsed as TOML with `[[options]]` tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// contains duplicate values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading options file");

        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let options = if is_json {
            serde_json::from_str::<Vec<SelectOption>>(&contents).map_err(|e| {
                AutoselectError::Options(format!("{}: {e}", path.display()))
            })?
        } else {
            toml::from_str::<OptionsFile>(&contents)
                .map_err(|e| AutoselectError::Options(format!("{}: {e}", path.display())))?
                .options
        };

        tracing::debug!(count = options.len(), "options file parsed");
        Self::new(options)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Finds the option with the given value.
    #[must_use]
    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == value)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_duplicate_values() {
        let err = OptionSet::new(vec![
            SelectOption::new("x", "One"),
            SelectOption::new("y", "Two"),
            SelectOption::new("x", "Three"),
        ])
        .unwrap_err();
        assert!(matches!(err, AutoselectError::DuplicateValue(v) if v == "x"));
    }

    #[test]
    fn inline_syntax_skips_empty_entries() {
        let set = OptionSet::parse_inline(" , a=Apple,, ").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.find("a").map(|o| o.label.as_str()), Some("Apple"));
    }

    #[test]
    fn inline_disabled_marker_is_stripped() {
        let set = OptionSet::parse_inline("! b = Banana").unwrap();
        let option = set.get(0).unwrap();
        assert_eq!(option.value, "b");
        assert_eq!(option.label, "Banana");
        assert!(option.disabled);
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[options]]\nvalue = \"a\"\nlabel = \"Apple\"\n\n[[options]]\nvalue = \"b\"\nlabel = \"Banana\"\ndisabled = true\ndescription = \"Out of season\""
        )
        .unwrap();

        let set = OptionSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        let banana = set.find("b").unwrap();
        assert!(banana.disabled);
        assert_eq!(banana.description.as_deref(), Some("Out of season"));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"value":"c","label":"Cherry","icon":"cherry"}}]"#).unwrap();

        let set = OptionSet::from_file(file.path()).unwrap();
        assert_eq!(set.get(0).unwrap().icon.as_deref(), Some("cherry"));
    }

    #[test]
    fn malformed_file_is_an_options_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();

        let err = OptionSet::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AutoselectError::Options(_)));
    }
}
