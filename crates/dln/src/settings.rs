//! Command-line defaults loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values for the `dln` command.
///
/// Values are layered from `DLN_`-prefixed environment variables and
/// configuration files. Command-line flags always take precedence over these
/// defaults.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DLN")]
pub struct DlnSettings {
    /// Suffix appended by `dln generate` when `--suffix` is not given.
    pub default_suffix: Option<String>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl DlnSettings {
    /// Returns the suffix to append, preferring an explicit value.
    #[must_use]
    pub fn suffix<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.default_suffix.as_deref())
            .unwrap_or_default()
    }
}
