//! Scanner mode flags and their serialisable configuration form.
//!
//! [`Mode`] is what [`Scanner::init`](crate::Scanner::init) takes.
//! [`ScanConfig`] is the same information in a shape that can sit in a
//! driver's TOML or JSON configuration file.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Controls scanner behaviour.
    ///
    /// The empty mode skips comments and inserts commas at line ends.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Mode: u8 {
        /// Return comments as COMMENT tokens instead of skipping them.
        const SCAN_COMMENTS = 1 << 0;
        /// Never synthesise commas at line ends. Low-level diagnostics only.
        const DONT_INSERT_COMMAS = 1 << 1;
    }
}

/// Scanner settings as they appear in configuration files.
///
/// # Example
///
/// ```
/// use cuec_lex::{Mode, ScanConfig};
///
/// let config: ScanConfig = toml::from_str("scan_comments = true").unwrap();
/// assert_eq!(Mode::from(config), Mode::SCAN_COMMENTS);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Emit comments as tokens.
    #[serde(default)]
    pub scan_comments: bool,

    /// Insert commas at qualifying line ends.
    #[serde(default = "default_true")]
    pub insert_commas: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_comments: false,
            insert_commas: true,
        }
    }
}

impl From<ScanConfig> for Mode {
    fn from(config: ScanConfig) -> Self {
        let mut mode = Mode::empty();
        mode.set(Mode::SCAN_COMMENTS, config.scan_comments);
        mode.set(Mode::DONT_INSERT_COMMAS, !config.insert_commas);
        mode
    }
}

impl From<Mode> for ScanConfig {
    fn from(mode: Mode) -> Self {
        Self {
            scan_comments: mode.contains(Mode::SCAN_COMMENTS),
            insert_commas: !mode.contains(Mode::DONT_INSERT_COMMAS),
        }
    }
}
