//! Quality values and weighted preferences
//!
//! Every `Accept*` header is a comma separated list of values, each optionally
//! followed by parameters such as `;q=0.8`. This module holds the shared
//! `(value, quality)` pair and the parser for the parameter fragment.

use std::fmt;

/// Quality assumed when a header entry carries no valid `q` parameter
pub const DEFAULT_QUALITY: f32 = 1.0;

/// A client-stated preference for a value, weighted by a quality factor
///
/// A quality of `0.0` means the value is explicitly excluded, not merely
/// least preferred.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::Preference;
///
/// let pref = Preference::new("gzip");
/// assert_eq!(pref.quality, 1.0);
/// assert!(!pref.is_excluded());
///
/// let excluded = Preference::with_quality("identity", 0.0);
/// assert!(excluded.is_excluded());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Preference<T> {
	/// The preferred value
	pub value: T,
	/// Quality factor in `[0, 1]`
	pub quality: f32,
}

impl<T> Preference<T> {
	/// Creates a preference with the default quality of 1.0
	pub fn new(value: T) -> Self {
		Self {
			value,
			quality: DEFAULT_QUALITY,
		}
	}

	/// Creates a preference with an explicit quality, clamped into `[0, 1]`
	pub fn with_quality(value: T, quality: f32) -> Self {
		let quality = if quality.is_nan() {
			DEFAULT_QUALITY
		} else {
			quality.clamp(0.0, 1.0)
		};
		Self { value, quality }
	}

	/// Returns true when the client explicitly excluded this value (`q=0`)
	pub fn is_excluded(&self) -> bool {
		self.quality <= 0.0
	}

	/// Returns true when this preference admits its value (`q>0`)
	pub fn is_acceptable(&self) -> bool {
		!self.is_excluded()
	}
}

impl<T: fmt::Display> fmt::Display for Preference<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.quality == DEFAULT_QUALITY {
			write!(f, "{}", self.value)
		} else {
			write!(f, "{};q={}", self.value, self.quality)
		}
	}
}

/// Extracts the `q` parameter from a header parameter fragment
///
/// The fragment is whatever follows the value in a header segment, e.g.
/// `";q=0.8"` or `"; level=1; q=0.5"`. Unrelated parameters are skipped.
/// Returns `None` when no well-formed `q` in `[0, 1]` is present; callers
/// fall back to [`DEFAULT_QUALITY`]. Malformed input never fails.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::qvalue::parse_quality;
///
/// assert_eq!(parse_quality(";q=0.8"), Some(0.8));
/// assert_eq!(parse_quality("; level=1 ; Q = 0.5"), Some(0.5));
/// assert_eq!(parse_quality(""), None);
/// assert_eq!(parse_quality(";q=abc"), None);
/// assert_eq!(parse_quality(";q=1.5"), None);
/// ```
pub fn parse_quality(params: &str) -> Option<f32> {
	for param in params.split(';') {
		let Some((key, value)) = param.split_once('=') else {
			continue;
		};
		if !key.trim().eq_ignore_ascii_case("q") {
			continue;
		}

		let value = value.trim();
		// `f32::from_str` also accepts "inf", "NaN" and exponents
		if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
			return None;
		}
		return value
			.parse::<f32>()
			.ok()
			.filter(|q| (0.0..=1.0).contains(q));
	}
	None
}

/// Parses the quality of a segment, defaulting to 1.0
pub(crate) fn quality_or_default(params: Option<&str>) -> f32 {
	params
		.and_then(parse_quality)
		.unwrap_or(DEFAULT_QUALITY)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(";q=0.8", Some(0.8))]
	#[case("q=0", Some(0.0))]
	#[case(";q=1", Some(1.0))]
	#[case(";q=1.000", Some(1.0))]
	#[case(";q=.5", Some(0.5))]
	#[case("; charset=utf-8; q=0.3", Some(0.3))]
	#[case(" ; Q=0.7 ", Some(0.7))]
	fn parses_valid_quality(#[case] params: &str, #[case] expected: Option<f32>) {
		assert_eq!(parse_quality(params), expected);
	}

	#[rstest]
	#[case("")]
	#[case(";")]
	#[case(";level=1")]
	#[case(";q=")]
	#[case(";q=high")]
	#[case(";q=-0.5")]
	#[case(";q=2")]
	#[case(";q=NaN")]
	#[case(";q=inf")]
	#[case(";q=1e-1")]
	#[case(";qq=0.5")]
	fn malformed_quality_is_absent(#[case] params: &str) {
		assert_eq!(parse_quality(params), None);
	}

	#[rstest]
	fn quality_defaults_to_one() {
		assert_eq!(quality_or_default(None), 1.0);
		assert_eq!(quality_or_default(Some(";q=oops")), 1.0);
		assert_eq!(quality_or_default(Some(";q=0.25")), 0.25);
	}

	#[rstest]
	fn with_quality_clamps_out_of_range_values() {
		assert_eq!(Preference::with_quality("a", 3.0).quality, 1.0);
		assert_eq!(Preference::with_quality("a", -1.0).quality, 0.0);
		assert_eq!(Preference::with_quality("a", f32::NAN).quality, 1.0);
	}

	#[rstest]
	fn display_omits_default_quality() {
		assert_eq!(Preference::new("gzip").to_string(), "gzip");
		assert_eq!(Preference::with_quality("br", 0.5).to_string(), "br;q=0.5");
	}
}
