//! Optional TOML configuration for repeated `ntc` invocations in one
//! project, so flags don't need repeating every run.
//!
//! Modeled on the teacher's `lint::LintConfig::from_toml`/`merge` pair:
//! parse into an all-`Option` struct, then let explicit CLI flags override
//! whatever the file set.

use std::path::Path;

use serde::Deserialize;
use toolchain_core::ToolError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NtcConfig {
    /// Whether to prepend the bootstrap sequence. `None` means "use the
    /// per-invocation default" (on for a directory, off for a lone file).
    pub bootstrap: Option<bool>,
}

impl NtcConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, ToolError> {
        toml::from_str(toml_str)
            .map_err(|e| ToolError::Malformed(format!("failed to parse config: {e}")))
    }

    pub fn from_file(path: &Path) -> Result<Self, ToolError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// CLI flags take precedence over whatever the file set.
    pub fn merge_cli_override(&mut self, bootstrap_override: Option<bool>) {
        if bootstrap_override.is_some() {
            self.bootstrap = bootstrap_override;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bootstrap_flag() {
        let cfg = NtcConfig::from_toml("bootstrap = false\n").unwrap();
        assert_eq!(cfg.bootstrap, Some(false));
    }

    #[test]
    fn empty_config_has_no_opinion() {
        let cfg = NtcConfig::from_toml("").unwrap();
        assert_eq!(cfg.bootstrap, None);
    }

    #[test]
    fn cli_override_wins_over_file() {
        let mut cfg = NtcConfig::from_toml("bootstrap = true\n").unwrap();
        cfg.merge_cli_override(Some(false));
        assert_eq!(cfg.bootstrap, Some(false));
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(NtcConfig::from_toml("not valid = = toml").is_err());
    }
}
