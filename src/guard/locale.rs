//! Locale prefixes for redirect targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Languages served by the marketplace. Every page path starts with one of them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    Fr,
    It,
    En,
}

impl Locale {
    pub const ALL: [Self; 4] = [Self::De, Self::Fr, Self::It, Self::En];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
            Self::En => "en",
        }
    }

    /// Exact, lowercase locale code.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == value)
    }

    /// Locale named by the first path segment, if any.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Self::parse)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix `path` with the locale segment.
///
/// `/` becomes exactly `/{locale}`. Paths already inside `/{locale}` are returned
/// unchanged.
#[must_use]
pub fn localize_path(locale: Locale, path: &str) -> String {
    let prefix = format!("/{locale}");

    if path.is_empty() || path == "/" {
        return prefix;
    }

    if let Some(rest) = path.strip_prefix(&prefix) {
        if rest.is_empty() || rest.starts_with(&['/', '?', '#'][..]) {
            return path.to_string();
        }
    }

    if path.starts_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}
