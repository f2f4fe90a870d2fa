//! Media types and media ranges

use crate::error::{NegotiationError, NegotiationResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Wildcard for either half of a media range
pub const WILDCARD: &str = "*";

static MEDIA_RANGE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\*|[A-Za-z0-9!#$%&'+.^_`|~-]+)/(\*|[A-Za-z0-9!#$%&'+.^_`|~-]+)\s*(;.*)?$")
		.expect("MEDIA_RANGE: invalid regex pattern")
});

/// A `type/subtype` pair, possibly a range such as `text/*` or `*/*`
///
/// Both halves are stored lower-cased. `*/concrete` is never constructed by
/// the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
	/// Top-level type (e.g. "application")
	pub main_type: String,
	/// Subtype (e.g. "json")
	pub subtype: String,
}

impl MediaType {
	/// Creates a media type from its two halves
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// let json = MediaType::new("Application", "JSON");
	/// assert_eq!(json.main_type, "application");
	/// assert_eq!(json.subtype, "json");
	/// assert_eq!(json.to_string(), "application/json");
	/// ```
	pub fn new(main_type: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			main_type: main_type.into().to_ascii_lowercase(),
			subtype: subtype.into().to_ascii_lowercase(),
		}
	}

	/// The `*/*` range
	pub fn any() -> Self {
		Self::new(WILDCARD, WILDCARD)
	}

	/// Parses `type/subtype[;params]`, returning the type and its parameter fragment
	///
	/// Returns `None` for anything that is not a valid range, including
	/// `*/concrete`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// let (media, params) = MediaType::parse("text/html; level=1; q=0.5").unwrap();
	/// assert_eq!(media, MediaType::new("text", "html"));
	/// assert_eq!(params, Some("; level=1; q=0.5"));
	///
	/// assert!(MediaType::parse("*/html").is_none());
	/// assert!(MediaType::parse("text").is_none());
	/// ```
	pub fn parse(s: &str) -> Option<(Self, Option<&str>)> {
		let caps = MEDIA_RANGE.captures(s.trim())?;
		let main_type = caps.get(1)?.as_str();
		let subtype = caps.get(2)?.as_str();
		if main_type == WILDCARD && subtype != WILDCARD {
			return None;
		}
		let params = caps.get(3).map(|m| m.as_str());
		Some((Self::new(main_type, subtype), params))
	}

	/// Returns true for `*/*`
	pub fn is_any(&self) -> bool {
		self.main_type == WILDCARD && self.subtype == WILDCARD
	}

	/// Returns true when either half is a wildcard
	pub fn is_range(&self) -> bool {
		self.main_type == WILDCARD || self.subtype == WILDCARD
	}

	/// Ranks how specific this range is: 2 for `type/subtype`, 1 for `type/*`, 0 for `*/*`
	pub fn specificity(&self) -> u8 {
		if self.is_any() {
			0
		} else if self.subtype == WILDCARD {
			1
		} else {
			2
		}
	}

	/// Checks if this range covers `other`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// let html = MediaType::new("text", "html");
	/// assert!(MediaType::any().matches(&html));
	/// assert!(MediaType::new("text", "*").matches(&html));
	/// assert!(html.matches(&html));
	/// assert!(!MediaType::new("text", "plain").matches(&html));
	/// assert!(!MediaType::new("image", "*").matches(&html));
	/// ```
	pub fn matches(&self, other: &MediaType) -> bool {
		if self.is_any() {
			return true;
		}
		if self.main_type != other.main_type {
			return false;
		}
		self.subtype == WILDCARD || self.subtype == other.subtype
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.subtype)
	}
}

impl FromStr for MediaType {
	type Err = NegotiationError;

	fn from_str(s: &str) -> NegotiationResult<Self> {
		match Self::parse(s) {
			Some((media, None)) => Ok(media),
			_ => Err(NegotiationError::InvalidMediaType(s.to_string())),
		}
	}
}

impl From<(&str, &str)> for MediaType {
	fn from((main_type, subtype): (&str, &str)) -> Self {
		Self::new(main_type, subtype)
	}
}
