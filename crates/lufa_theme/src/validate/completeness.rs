//! Required-token completeness check

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::info;

use crate::css::CustomProperty;
use crate::manifest::TokenManifest;

/// Outcome of a completeness run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessResult {
    pub valid: bool,
    pub total_required: usize,
    /// Distinct token names defined by the theme
    pub total_defined: usize,
    /// Every missing required token, in manifest order
    pub missing_tokens: Vec<String>,
}

/// Compares defined tokens against a required-token manifest
#[derive(Clone, Debug)]
pub struct CompletenessValidator {
    manifest: TokenManifest,
}

impl CompletenessValidator {
    pub fn new(manifest: TokenManifest) -> Self {
        Self { manifest }
    }

    pub fn manifest(&self) -> &TokenManifest {
        &self.manifest
    }

    pub fn validate(&self, properties: &[CustomProperty]) -> CompletenessResult {
        let defined: FxHashSet<&str> = properties.iter().map(|p| p.name.as_str()).collect();

        let missing_tokens: Vec<String> = self
            .manifest
            .required()
            .iter()
            .filter(|name| !defined.contains(name.as_str()))
            .cloned()
            .collect();

        let result = CompletenessResult {
            valid: missing_tokens.is_empty(),
            total_required: self.manifest.len(),
            total_defined: defined.len(),
            missing_tokens,
        };

        info!(
            required = result.total_required,
            defined = result.total_defined,
            missing = result.missing_tokens.len(),
            "completeness check finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn manifest(names: &[&str]) -> TokenManifest {
        TokenManifest::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn props(names: &[&str]) -> Vec<CustomProperty> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| CustomProperty::new(*n, "#fff", i + 1))
            .collect()
    }

    #[test]
    fn all_defined_is_valid() {
        let validator = CompletenessValidator::new(manifest(&["--lufa-a", "--lufa-b"]));
        let result = validator.validate(&props(&["--lufa-b", "--lufa-a", "--lufa-extra"]));
        assert_eq!(
            result,
            CompletenessResult {
                valid: true,
                total_required: 2,
                total_defined: 3,
                missing_tokens: vec![],
            }
        );
    }

    #[test]
    fn every_missing_token_listed_in_manifest_order() {
        let required = ["--lufa-a", "--lufa-b", "--lufa-c", "--lufa-d", "--lufa-e"];
        let validator = CompletenessValidator::new(manifest(&required));
        let result = validator.validate(&props(&["--lufa-d", "--lufa-b"]));
        assert!(!result.valid);
        assert_eq!(result.missing_tokens, vec!["--lufa-a", "--lufa-c", "--lufa-e"]);
        assert_eq!(result.missing_tokens.len(), required.len() - 2);
    }

    #[test]
    fn single_missing_token_invalidates() {
        let validator = CompletenessValidator::new(manifest(&["--lufa-a", "--lufa-b"]));
        let result = validator.validate(&props(&["--lufa-a"]));
        assert!(!result.valid);
        assert_eq!(result.missing_tokens, vec!["--lufa-b"]);
    }

    #[test]
    fn duplicates_count_once() {
        let validator = CompletenessValidator::new(manifest(&["--lufa-a"]));
        let result = validator.validate(&props(&["--lufa-a", "--lufa-a"]));
        assert!(result.valid);
        assert_eq!(result.total_defined, 1);
    }

    #[test]
    fn empty_input_misses_everything() {
        let validator = CompletenessValidator::new(TokenManifest::lufa("lufa"));
        let result = validator.validate(&[]);
        assert!(!result.valid);
        assert_eq!(result.total_defined, 0);
        assert_eq!(result.missing_tokens.len(), result.total_required);
    }

    #[test]
    fn empty_manifest_is_trivially_valid() {
        let validator = CompletenessValidator::new(TokenManifest::default());
        assert!(validator.validate(&props(&["--lufa-a"])).valid);
    }

    #[test]
    fn serializes_camel_case() {
        let validator = CompletenessValidator::new(manifest(&["--lufa-a"]));
        let json = serde_json::to_value(validator.validate(&[])).unwrap();
        assert_eq!(json["totalRequired"], 1);
        assert_eq!(json["missingTokens"][0], "--lufa-a");
    }
}
