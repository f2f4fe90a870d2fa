//! Content-coding negotiation based on the Accept-Encoding header

use crate::qvalue::{Preference, quality_or_default};
use regex::Regex;
use std::sync::LazyLock;

/// The "no transformation" coding, acceptable unless the client excludes it
pub const IDENTITY: &str = "identity";

/// Matches any coding not explicitly listed
pub const WILDCARD: &str = "*";

static CODING_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([A-Za-z0-9!#$%&'*+.^_`|~-]+)\s*(;.*)?$")
		.expect("CODING_SEGMENT: invalid regex pattern")
});

/// Normalizes a coding name, folding the legacy `x-` aliases
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::encoding::normalize_coding;
///
/// assert_eq!(normalize_coding("GZip"), "gzip");
/// assert_eq!(normalize_coding("x-gzip"), "gzip");
/// assert_eq!(normalize_coding("x-compress"), "compress");
/// assert_eq!(normalize_coding("br"), "br");
/// ```
pub fn normalize_coding(name: &str) -> String {
	let name = name.trim().to_ascii_lowercase();
	match name.as_str() {
		"x-gzip" => "gzip".to_string(),
		"x-compress" => "compress".to_string(),
		_ => name,
	}
}

/// A parsed and prioritized Accept-Encoding header
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptEncoding {
	preferences: Vec<Preference<String>>,
}

impl AcceptEncoding {
	/// Parses an Accept-Encoding header value
	///
	/// An absent header, or one without a single usable entry, yields the
	/// implicit preference `identity;q=1`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::AcceptEncoding;
	///
	/// let accept = AcceptEncoding::parse(Some("gzip;q=0.8, br, identity"));
	/// let names: Vec<&str> = accept.preferences().iter().map(|p| p.value.as_str()).collect();
	/// assert_eq!(names, vec!["br", "identity", "gzip"]);
	///
	/// let absent = AcceptEncoding::parse(None);
	/// assert_eq!(absent.preferences().len(), 1);
	/// assert_eq!(absent.preferences()[0].value, "identity");
	/// ```
	pub fn parse(header: Option<&str>) -> Self {
		let mut preferences: Vec<Preference<String>> = header
			.unwrap_or_default()
			.split(',')
			.map(str::trim)
			.filter(|segment| !segment.is_empty())
			.filter_map(parse_segment)
			.collect();

		if preferences.is_empty() {
			preferences.push(Preference::new(IDENTITY.to_string()));
		}

		prioritize(&mut preferences);
		Self { preferences }
	}

	/// Returns the preferences in priority order
	pub fn preferences(&self) -> &[Preference<String>] {
		&self.preferences
	}

	/// Returns true when the client named `coding` with `q=0`
	pub fn is_excluded(&self, coding: &str) -> bool {
		self.preferences
			.iter()
			.any(|p| p.value == coding && p.is_excluded())
	}

	/// Returns true when the client has ruled out the identity coding
	///
	/// Identity is ruled out by an explicit `identity;q=0`, or by `*;q=0`
	/// unless identity is also accepted explicitly.
	pub fn is_identity_excluded(&self) -> bool {
		if self.is_excluded(IDENTITY) {
			return true;
		}
		let explicitly_accepted = self
			.preferences
			.iter()
			.any(|p| p.value == IDENTITY && p.is_acceptable());
		self.is_excluded(WILDCARD) && !explicitly_accepted
	}

	/// Decides whether `preference` makes the `available` coding acceptable
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{AcceptEncoding, Preference};
	///
	/// let accept = AcceptEncoding::parse(Some("gzip, *;q=0"));
	/// let gzip = Preference::new("gzip".to_string());
	/// assert!(accept.accepts(&gzip, "gzip"));
	/// assert!(!accept.accepts(&gzip, "br"));
	/// assert!(!accept.accepts(&gzip, "identity"));
	/// ```
	pub fn accepts(&self, preference: &Preference<String>, available: &str) -> bool {
		if self.accepts_by_name(preference, available) {
			return true;
		}
		available == IDENTITY && !self.is_identity_excluded()
	}

	fn accepts_by_name(&self, preference: &Preference<String>, available: &str) -> bool {
		if preference.is_excluded() || self.is_excluded(available) {
			return false;
		}
		if preference.value == available {
			return true;
		}
		preference.value == WILDCARD && !(available == IDENTITY && self.is_identity_excluded())
	}

	/// Selects the coding to apply from the server's available codings
	///
	/// Codings the client names (directly or through `*`) win in priority
	/// order; identity is the implicit last resort when offered and not
	/// excluded.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::AcceptEncoding;
	///
	/// let accept = AcceptEncoding::parse(Some("*;q=0, gzip"));
	/// assert_eq!(
	///     accept.acceptable_encoding(&["identity", "deflate", "gzip"]),
	///     Some("gzip".to_string())
	/// );
	///
	/// let absent = AcceptEncoding::parse(None);
	/// assert_eq!(absent.acceptable_encoding(&["gzip", "deflate"]), None);
	/// ```
	pub fn acceptable_encoding<S: AsRef<str>>(&self, availables: &[S]) -> Option<String> {
		let normalized: Vec<String> = availables
			.iter()
			.map(|a| normalize_coding(a.as_ref()))
			.collect();

		let position = self
			.preferences
			.iter()
			.find_map(|pref| {
				normalized
					.iter()
					.position(|available| self.accepts_by_name(pref, available))
			})
			.or_else(|| {
				self.preferences.iter().find_map(|pref| {
					normalized
						.iter()
						.position(|available| self.accepts(pref, available))
				})
			});
		// Names are compared normalized but returned as the server declared them
		let chosen = position.map(|index| availables[index].as_ref().to_string());

		tracing::debug!(
			preferences = ?self.preferences,
			availables = ?normalized,
			?chosen,
			"negotiated content coding"
		);
		chosen
	}
}

fn parse_segment(segment: &str) -> Option<Preference<String>> {
	let Some(caps) = CODING_SEGMENT.captures(segment) else {
		tracing::trace!(segment, "dropping unparseable Accept-Encoding segment");
		return None;
	};
	let name = normalize_coding(&caps[1]);
	let quality = quality_or_default(caps.get(2).map(|m| m.as_str()));
	Some(Preference::with_quality(name, quality))
}

/// Sorts by descending quality; at equal quality identity goes last
fn prioritize(preferences: &mut [Preference<String>]) {
	preferences.sort_by(|a, b| {
		b.quality
			.total_cmp(&a.quality)
			.then_with(|| (a.value == IDENTITY).cmp(&(b.value == IDENTITY)))
	});
}
