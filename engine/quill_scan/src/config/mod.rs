//! Caller-owned scanner configuration.
//!
//! These switches were process-wide singletons in older highlighting
//! engines; here each scanner instance owns its copy, so a scan is a pure
//! function of (line text, incoming state, the instance's config) and the
//! toggles need no external synchronization. Changes apply to subsequent
//! scans only — never retroactively to lines already tokenized.

use std::str::FromStr;

/// ECMAScript language level for the JavaScript keyword table.
///
/// Controls which identifiers the dialect table reserves: `let`/`yield`
/// from ES6, `async`/`await` from ES2017.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsVersion {
    /// ES3: no `let`, `yield`, `async`, or `await`.
    Es3,
    /// ES5 strict-mode era: still no `let`/`yield`.
    Es5,
    /// ES6/ES2015: `let`, `const`, `yield`, `class`, arrow functions.
    Es6,
    /// ES2017 and later: adds `async`/`await`.
    #[default]
    Es2017,
}

/// Error parsing a [`JsVersion`] from its string form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized JavaScript version `{0}` (expected es3, es5, es6/es2015, or es2017)")]
pub struct ParseJsVersionError(String);

impl FromStr for JsVersion {
    type Err = ParseJsVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es3" | "3" => Ok(JsVersion::Es3),
            "es5" | "5" => Ok(JsVersion::Es5),
            "es6" | "6" | "es2015" | "2015" => Ok(JsVersion::Es6),
            "es2017" | "2017" => Ok(JsVersion::Es2017),
            _ => Err(ParseJsVersionError(s.to_owned())),
        }
    }
}

/// Configuration toggles consulted by the scanners.
///
/// Owned by each scanner instance; mutate via [`set_config`] on the scanner
/// (or the setters here before construction). Every toggle affects
/// subsequent scans only.
///
/// [`set_config`]: crate::TokenScanner::set_config
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    complete_close_tags: bool,
    javascript_version: JsVersion,
    e4x_supported: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            complete_close_tags: true,
            javascript_version: JsVersion::default(),
            e4x_supported: false,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the editor should auto-complete `</…>` close tags for the
    /// markup scanners. Metadata for the editor; does not change
    /// tokenization.
    pub fn complete_close_tags(&self) -> bool {
        self.complete_close_tags
    }

    pub fn set_complete_close_tags(&mut self, value: bool) {
        self.complete_close_tags = value;
    }

    /// Active JavaScript keyword-table version.
    pub fn javascript_version(&self) -> JsVersion {
        self.javascript_version
    }

    pub fn set_javascript_version(&mut self, version: JsVersion) {
        self.javascript_version = version;
    }

    /// Whether the E4X extension keyword `each` is reserved.
    pub fn e4x_supported(&self) -> bool {
        self.e4x_supported
    }

    pub fn set_e4x_supported(&mut self, value: bool) {
        self.e4x_supported = value;
    }

    /// Builder-style variant of [`set_complete_close_tags`](Self::set_complete_close_tags).
    pub fn with_complete_close_tags(mut self, value: bool) -> Self {
        self.complete_close_tags = value;
        self
    }

    /// Builder-style variant of [`set_javascript_version`](Self::set_javascript_version).
    pub fn with_javascript_version(mut self, version: JsVersion) -> Self {
        self.javascript_version = version;
        self
    }

    /// Builder-style variant of [`set_e4x_supported`](Self::set_e4x_supported).
    pub fn with_e4x_supported(mut self, value: bool) -> Self {
        self.e4x_supported = value;
        self
    }
}
