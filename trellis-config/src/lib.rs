//! Configuration for trellis.
//!
//! The config is a KDL document. Every section is optional and falls back to its default.
//!
//! ```kdl
//! floating {
//!     minimum-size width=75 height=50
//!     maximum-size width=0 height=0
//! }
//!
//! resize {
//!     default-amount 10
//! }
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use miette::{Context, IntoDiagnostic};
use tracing::debug;

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[knuffel(child, default)]
    pub floating: Floating,
    #[knuffel(child, default)]
    pub resize: Resize,
}

/// Size limits for floating containers.
#[derive(knuffel::Decode, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Floating {
    #[knuffel(child, default)]
    pub minimum_size: SizeLimit,
    #[knuffel(child, default)]
    pub maximum_size: SizeLimit,
}

/// A per-axis size limit.
///
/// Each dimension is either `-1` (no limit), `0` (pick automatically) or an explicit size in
/// logical pixels.
#[derive(knuffel::Decode, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimit {
    #[knuffel(property, default)]
    pub width: i32,
    #[knuffel(property, default)]
    pub height: i32,
}

impl SizeLimit {
    pub const UNLIMITED: i32 = -1;
    pub const AUTOMATIC: i32 = 0;
}

#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    /// Amount used by `resize grow` and `resize shrink` when none is given.
    #[knuffel(child, unwrap(argument), default = Resize::DEFAULT_AMOUNT)]
    pub default_amount: i32,
}

impl Resize {
    pub const DEFAULT_AMOUNT: i32 = 10;
}

impl Default for Resize {
    fn default() -> Self {
        Self {
            default_amount: Self::DEFAULT_AMOUNT,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let config = Self::parse(
            path.file_name()
                .and_then(OsStr::to_str)
                .unwrap_or("config.kdl"),
            &contents,
        )
        .context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracy_client::span!("Config::parse");
        knuffel::parse(filename, text)
    }
}
