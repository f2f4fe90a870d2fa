//! Language negotiation based on Accept-Language header

use crate::error::{NegotiationError, NegotiationResult};
use crate::locale;
use crate::qvalue::{Preference, quality_or_default};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Tag of the wildcard language
pub const WILDCARD: &str = "*";

static LANGUAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\*|[A-Za-z]{1,8})(?:-([A-Za-z0-9]{1,8}))?\s*(;.*)?$")
		.expect("LANGUAGE_RANGE: invalid regex pattern")
});

/// A language with an optional region
///
/// The tag is stored lower-case and the region upper-case, so two values are
/// equal exactly when their tag and region match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lang {
	/// Primary language tag (e.g., "en", "fr", "ja"), or "*" for the wildcard
	pub tag: String,
	/// Optional region (e.g., "US", "GB", "JP")
	pub region: Option<String>,
}

impl Lang {
	/// Creates a bare language
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Lang;
	///
	/// let en = Lang::new("EN");
	/// assert_eq!(en.tag, "en");
	/// assert_eq!(en.region, None);
	/// assert!(en.is_bare());
	/// ```
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into().to_ascii_lowercase(),
			region: None,
		}
	}

	/// Creates a Language with region
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Lang;
	///
	/// let en_us = Lang::with_region("en", "us");
	/// assert_eq!(en_us.tag, "en");
	/// assert_eq!(en_us.region, Some("US".to_string()));
	/// assert_eq!(en_us, Lang::with_region("EN", "US"));
	/// ```
	pub fn with_region(tag: impl Into<String>, region: impl Into<String>) -> Self {
		Self {
			tag: tag.into().to_ascii_lowercase(),
			region: Some(region.into().to_ascii_uppercase()),
		}
	}

	/// The wildcard language, matching any language
	pub fn wildcard() -> Self {
		Self::new(WILDCARD)
	}

	/// Parses a recognized language tag such as `"en"` or `"pt-BR"`
	///
	/// Returns `None` for malformed tags and for tag/region combinations
	/// missing from the [`locale`] table. `"*"` parses to the wildcard.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Lang;
	///
	/// assert_eq!(Lang::parse("pt-br"), Some(Lang::with_region("pt", "BR")));
	/// assert_eq!(Lang::parse("*"), Some(Lang::wildcard()));
	/// assert_eq!(Lang::parse("en-JP"), None);
	/// assert_eq!(Lang::parse("en-US;q=0.5"), None);
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		match parse_range(s.trim())? {
			(lang, None) => Some(lang),
			_ => None,
		}
	}

	/// Returns true for the wildcard language
	pub fn is_wildcard(&self) -> bool {
		self.tag == WILDCARD
	}

	/// Returns true when no region is attached
	pub fn is_bare(&self) -> bool {
		self.region.is_none()
	}

	/// Returns true when both languages share the primary tag, ignoring regions
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Lang;
	///
	/// let en_us = Lang::with_region("en", "US");
	/// assert!(en_us.same_tag(&Lang::with_region("en", "GB")));
	/// assert!(en_us.same_tag(&Lang::new("en")));
	/// assert!(!en_us.same_tag(&Lang::new("fr")));
	/// ```
	pub fn same_tag(&self, other: &Lang) -> bool {
		self.tag == other.tag
	}

	/// Returns the full language tag (e.g., "en-US")
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Lang;
	///
	/// assert_eq!(Lang::with_region("en", "US").to_tag(), "en-US");
	/// assert_eq!(Lang::new("en").to_tag(), "en");
	/// ```
	pub fn to_tag(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Lang {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.region {
			Some(region) => write!(f, "{}-{}", self.tag, region),
			None => f.write_str(&self.tag),
		}
	}
}

impl FromStr for Lang {
	type Err = NegotiationError;

	fn from_str(s: &str) -> NegotiationResult<Self> {
		Self::parse(s).ok_or_else(|| NegotiationError::InvalidLanguageTag(s.to_string()))
	}
}

/// Parses `primary[-region][;params]` and validates it against the locale table
fn parse_range(segment: &str) -> Option<(Lang, Option<&str>)> {
	let caps = LANGUAGE_RANGE.captures(segment)?;
	let tag = caps.get(1)?.as_str();
	let region = caps.get(2).map(|m| m.as_str());
	let params = caps.get(3).map(|m| m.as_str());

	let lang = match (tag, region) {
		(WILDCARD, None) => Lang::wildcard(),
		(WILDCARD, Some(_)) => return None,
		(tag, region) if !locale::is_known(tag, region) => return None,
		(tag, None) => Lang::new(tag),
		(tag, Some(region)) => Lang::with_region(tag, region),
	};
	Some((lang, params))
}

/// A parsed and prioritized Accept-Language header
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptLanguage {
	preferences: Vec<Preference<Lang>>,
}

impl AcceptLanguage {
	/// Parses an Accept-Language header value
	///
	/// Unknown languages are dropped. When a primary tag appears more than
	/// once only its first occurrence is kept.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{AcceptLanguage, Lang};
	///
	/// let accept = AcceptLanguage::parse(Some("en-US, fr;q=0.9, ja;q=0.8, en;q=0.1"));
	/// let langs: Vec<String> = accept.preferences().iter().map(|p| p.value.to_tag()).collect();
	/// assert_eq!(langs, vec!["en-US", "fr", "ja"]);
	/// assert_eq!(accept.preferences()[1].quality, 0.9);
	/// ```
	pub fn parse(header: Option<&str>) -> Self {
		let mut preferences: Vec<Preference<Lang>> = Vec::new();

		for segment in header.unwrap_or_default().split(',').map(str::trim) {
			if segment.is_empty() {
				continue;
			}
			let Some((lang, params)) = parse_range(segment) else {
				tracing::trace!(segment, "dropping unrecognized Accept-Language segment");
				continue;
			};
			if preferences.iter().any(|p| p.value.same_tag(&lang)) {
				continue;
			}
			preferences.push(Preference::with_quality(lang, quality_or_default(params)));
		}

		// Sort by quality (highest first); the wildcard yields to explicit languages
		preferences.sort_by(|a, b| {
			b.quality
				.total_cmp(&a.quality)
				.then_with(|| a.value.is_wildcard().cmp(&b.value.is_wildcard()))
		});

		Self { preferences }
	}

	/// Returns every parsed preference, excluded ones included, in priority order
	pub fn preferences(&self) -> &[Preference<Lang>] {
		&self.preferences
	}

	/// Languages the client ruled out with `q=0`
	pub fn excluded(&self) -> impl Iterator<Item = &Lang> {
		self.preferences
			.iter()
			.filter(|p| p.is_excluded())
			.map(|p| &p.value)
	}

	/// Languages the client accepts, in priority order
	///
	/// A header that states nothing at all accepts anything.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{AcceptLanguage, Lang};
	///
	/// assert_eq!(AcceptLanguage::parse(None).accepted(), vec![Lang::wildcard()]);
	/// assert!(AcceptLanguage::parse(Some("fr;q=0")).accepted().is_empty());
	/// ```
	pub fn accepted(&self) -> Vec<Lang> {
		if self.preferences.is_empty() {
			return vec![Lang::wildcard()];
		}
		self.preferences
			.iter()
			.filter(|p| p.is_acceptable())
			.map(|p| p.value.clone())
			.collect()
	}

	/// Returns true when the client excluded exactly `available`
	///
	/// Exclusion compares tag and region, so `de;q=0` leaves `de-AT` to any
	/// wildcard or `de-AT` preference.
	pub fn is_excluded(&self, available: &Lang) -> bool {
		self.excluded().any(|excluded| excluded == available)
	}

	/// Decides whether the client language `client` admits `available`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{AcceptLanguage, Lang};
	///
	/// let accept = AcceptLanguage::parse(Some("en, fr-CA;q=0"));
	/// let en_gb = Lang::with_region("en", "GB");
	/// assert!(accept.accepts(&Lang::new("en"), &en_gb));
	/// assert!(accept.accepts(&Lang::wildcard(), &Lang::new("de")));
	/// assert!(!accept.accepts(&Lang::wildcard(), &Lang::with_region("fr", "CA")));
	/// ```
	pub fn accepts(&self, client: &Lang, available: &Lang) -> bool {
		if self.is_excluded(available) {
			return false;
		}
		client.is_wildcard() || client == available || client.same_tag(available)
	}

	/// Ranks the available languages by the client's preferences
	///
	/// Languages the client names (exactly or by primary tag) come first in
	/// client priority order, preferring an exact region match. Remaining
	/// languages still admitted by a wildcard or a shared primary tag follow
	/// in the order the server declared them.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{AcceptLanguage, Lang};
	///
	/// let accept = AcceptLanguage::parse(Some("es, en-US, es"));
	/// let ranked = accept.acceptable_languages(&[Lang::new("en"), Lang::new("es")]);
	/// assert_eq!(ranked, vec![Lang::new("es"), Lang::new("en")]);
	/// ```
	pub fn acceptable_languages(&self, available: &[Lang]) -> Vec<Lang> {
		let accepted = self.accepted();
		let mut ranked: Vec<Lang> = Vec::new();

		for client in accepted.iter().filter(|lang| !lang.is_wildcard()) {
			let exact = available
				.iter()
				.find(|lang| *lang == client && !self.is_excluded(lang));
			let winner = exact.or_else(|| {
				available
					.iter()
					.find(|lang| client.same_tag(lang) && !self.is_excluded(lang))
			});
			if let Some(winner) = winner
				&& !ranked.contains(winner)
			{
				ranked.push(winner.clone());
			}
		}

		for lang in available {
			if ranked.contains(lang) {
				continue;
			}
			if accepted.iter().any(|client| self.accepts(client, lang)) {
				ranked.push(lang.clone());
			}
		}

		tracing::debug!(
			preferences = ?self.preferences,
			?available,
			?ranked,
			"negotiated languages"
		);
		ranked
	}

	/// Returns the best available language, if any
	pub fn acceptable_language(&self, available: &[Lang]) -> Option<Lang> {
		self.acceptable_languages(available).into_iter().next()
	}
}
