//! Zoho data-center regions.
//!
//! Every Zoho account lives in one data center, selected by a two-letter
//! region code. Parsing a region code never fails: anything unrecognized
//! resolves to [`Region::Us`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A Zoho data center.
///
/// # Example
///
/// ```rust
/// use zoho_crm::Region;
///
/// let region: Region = "EU".parse().unwrap();
/// assert_eq!(region, Region::Eu);
/// assert_eq!(region.base_url(), "https://accounts.zoho.eu");
///
/// // Unknown codes fall back to the US data center
/// assert_eq!(Region::from_code("XX"), Region::Us);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States (`accounts.zoho.com`).
    #[default]
    Us,
    /// Australia (`accounts.zoho.com.au`).
    Au,
    /// Europe (`accounts.zoho.eu`).
    Eu,
    /// India (`accounts.zoho.in`).
    In,
    /// China (`accounts.zoho.com.cn`).
    Cn,
}

impl Region {
    /// All known regions.
    pub const ALL: [Self; 5] = [Self::Us, Self::Au, Self::Eu, Self::In, Self::Cn];

    /// Maps a region code to a region, defaulting to [`Region::Us`].
    ///
    /// Codes are matched exactly (`"US"`, `"AU"`, `"EU"`, `"IN"`, `"CN"`).
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "AU" => Self::Au,
            "EU" => Self::Eu,
            "IN" => Self::In,
            "CN" => Self::Cn,
            _ => Self::Us,
        }
    }

    /// Returns the two-letter code of this region.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Au => "AU",
            Self::Eu => "EU",
            Self::In => "IN",
            Self::Cn => "CN",
        }
    }

    /// Returns the accounts host for this region.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Us => "https://accounts.zoho.com",
            Self::Au => "https://accounts.zoho.com.au",
            Self::Eu => "https://accounts.zoho.eu",
            Self::In => "https://accounts.zoho.in",
            Self::Cn => "https://accounts.zoho.com.cn",
        }
    }
}

/// Resolves the base URL for a region code, honoring an explicit override.
///
/// A non-empty override is returned verbatim. Otherwise the region code is
/// mapped to its host, falling back to the US host for unknown codes.
///
/// # Example
///
/// ```rust
/// use zoho_crm::resolve_base_url;
///
/// assert_eq!(resolve_base_url("IN", None), "https://accounts.zoho.in");
/// assert_eq!(resolve_base_url("??", None), "https://accounts.zoho.com");
/// assert_eq!(
///     resolve_base_url("IN", Some("http://localhost:8080")),
///     "http://localhost:8080"
/// );
/// ```
#[must_use]
pub fn resolve_base_url(region_code: &str, base_url_override: Option<&str>) -> String {
    match base_url_override {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => Region::from_code(region_code).base_url().to_string(),
    }
}

impl FromStr for Region {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}
