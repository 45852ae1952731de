//! Module name normalization and derived identifiers

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// A validated module name: lowercase ASCII letters, digits and hyphens
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Normalize raw user input into a module name
    ///
    /// Trims surrounding whitespace, lowercases, and turns spaces into hyphens.
    /// The input may only contain ASCII letters, digits, spaces and hyphens, and
    /// must contain at least one letter or digit.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        // Checked before lowercasing: some non-ASCII characters lowercase to ASCII
        let valid = trimmed.chars().any(|c| c.is_ascii_alphanumeric())
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-');

        if !valid {
            return Err(ScaffoldError::InvalidName {
                raw: raw.to_string(),
            });
        }

        Ok(Self(trimmed.to_ascii_lowercase().replace(' ', "-")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PascalCase form used in generated type and function names
    pub fn pascal_case(&self) -> String {
        kebab_to_pascal(&self.0)
    }

    /// Exported zod schema, e.g. `feedbackSchema`
    pub fn schema_ident(&self) -> String {
        format!("{}Schema", self.0)
    }

    /// Inferred form values type, e.g. `FeedbackFormValues`
    pub fn form_values_ident(&self) -> String {
        format!("{}FormValues", self.pascal_case())
    }

    /// Create procedure, e.g. `createFeedbackProcedure`
    pub fn procedure_ident(&self) -> String {
        format!("create{}Procedure", self.pascal_case())
    }

    /// Router object, e.g. `feedbackRouter`
    pub fn router_ident(&self) -> String {
        format!("{}Router", self.0)
    }

    /// HTTP route path, e.g. `/feedback`
    pub fn route_path(&self) -> String {
        format!("/{}", self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capitalize each hyphen-separated segment and join them
///
/// Empty segments (from leading, trailing or doubled hyphens) contribute nothing.
pub fn kebab_to_pascal(s: &str) -> String {
    s.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        let name = ModuleName::parse("feedback").unwrap();
        assert_eq!(name.as_str(), "feedback");
        assert_eq!(name.pascal_case(), "Feedback");
    }

    #[test]
    fn test_parse_normalizes_case_and_spaces() {
        let name = ModuleName::parse("  Feedback Form ").unwrap();
        assert_eq!(name.as_str(), "feedback-form");
        assert_eq!(name.pascal_case(), "FeedbackForm");
    }

    #[test]
    fn test_parse_keeps_digits_and_hyphens() {
        let name = ModuleName::parse("user-settings-v2").unwrap();
        assert_eq!(name.as_str(), "user-settings-v2");
        assert_eq!(name.pascal_case(), "UserSettingsV2");
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        for raw in ["", "   ", "-", "---", " - "] {
            let err = ModuleName::parse(raw).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidName { .. }),
                "expected usage error for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_rejects_symbols() {
        for raw in [
            "user_settings",
            "feedback!",
            "a.b",
            "módulo",
            "tab\tname",
            "../etc",
            "\u{212A}eys",
        ] {
            assert!(
                ModuleName::parse(raw).is_err(),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_that_lowercases_to_ascii() {
        // KELVIN SIGN lowercases to a plain 'k'
        assert_eq!("\u{212A}".to_lowercase(), "k");
        let err = ModuleName::parse("\u{212A}eys").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }));
    }

    #[test]
    fn test_kebab_to_pascal() {
        assert_eq!(kebab_to_pascal("feedback"), "Feedback");
        assert_eq!(kebab_to_pascal("user-settings"), "UserSettings");
        assert_eq!(kebab_to_pascal("a--b"), "AB");
        assert_eq!(kebab_to_pascal("2fa-codes"), "2faCodes");
        assert_eq!(kebab_to_pascal("-leading"), "Leading");
    }

    #[test]
    fn test_derived_identifiers() {
        let name = ModuleName::parse("user-settings").unwrap();
        assert_eq!(name.schema_ident(), "user-settingsSchema");
        assert_eq!(name.form_values_ident(), "UserSettingsFormValues");
        assert_eq!(name.procedure_ident(), "createUserSettingsProcedure");
        assert_eq!(name.router_ident(), "user-settingsRouter");
        assert_eq!(name.route_path(), "/user-settings");
    }
}
