//! Accept header parsing

use crate::media_type::MediaType;
use crate::qvalue::{Preference, quality_or_default};

/// Represents an Accept header
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptHeader {
	media_types: Vec<Preference<MediaType>>,
}

impl AcceptHeader {
	/// Parses an Accept header value into prioritized media ranges
	///
	/// Unparseable segments and `*/concrete` ranges are dropped, and identical
	/// `(type, subtype, q)` entries are kept once.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse(Some("application/json, text/html; q=0.9"));
	/// assert_eq!(accept.media_types().len(), 2);
	/// assert_eq!(accept.media_types()[0].quality, 1.0);
	/// assert_eq!(accept.media_types()[1].quality, 0.9);
	///
	/// let complex = AcceptHeader::parse(Some("*/*; q=0.1, text/*, text/html"));
	/// // Sorted by quality, then specificity
	/// assert_eq!(complex.media_types()[0].value.to_string(), "text/html");
	/// assert_eq!(complex.media_types()[1].value.to_string(), "text/*");
	/// assert_eq!(complex.media_types()[2].value.to_string(), "*/*");
	/// ```
	pub fn parse(header: Option<&str>) -> Self {
		let mut media_types: Vec<Preference<MediaType>> = Vec::new();

		for segment in header.unwrap_or_default().split(',').map(str::trim) {
			if segment.is_empty() {
				continue;
			}
			let Some((media, params)) = MediaType::parse(segment) else {
				tracing::trace!(segment, "dropping unparseable Accept segment");
				continue;
			};
			let preference = Preference::with_quality(media, quality_or_default(params));
			if !media_types.contains(&preference) {
				media_types.push(preference);
			}
		}

		// Sort by quality (highest first), then by specificity
		media_types.sort_by(|a, b| {
			b.quality
				.total_cmp(&a.quality)
				.then_with(|| b.value.specificity().cmp(&a.value.specificity()))
		});

		Self { media_types }
	}

	/// Creates an empty AcceptHeader with no media types
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::AcceptHeader;
	///
	/// let empty = AcceptHeader::empty();
	/// assert!(empty.media_types().is_empty());
	/// ```
	pub fn empty() -> Self {
		Self {
			media_types: Vec::new(),
		}
	}

	/// Returns the media ranges in priority order
	pub fn media_types(&self) -> &[Preference<MediaType>] {
		&self.media_types
	}

	/// Returns true when the client stated no usable preference
	pub fn is_empty(&self) -> bool {
		self.media_types.is_empty()
	}

	/// Returns true when the most specific range covering `available` has `q=0`
	///
	/// Among equally specific ranges the highest quality decides, so a type
	/// listed both with and without `q=0` stays acceptable.
	pub fn is_excluded(&self, available: &MediaType) -> bool {
		self.media_types
			.iter()
			.filter(|pref| pref.value.matches(available))
			.max_by(|a, b| {
				a.value
					.specificity()
					.cmp(&b.value.specificity())
					.then_with(|| a.quality.total_cmp(&b.quality))
			})
			.is_some_and(|pref| pref.is_excluded())
	}

	/// Decides whether `preference` admits the `available` type
	pub fn accepts(&self, preference: &Preference<MediaType>, available: &MediaType) -> bool {
		preference.is_acceptable()
			&& preference.value.matches(available)
			&& !self.is_excluded(available)
	}

	/// Finds the best matching media type from available options
	///
	/// Without any client preference the server's first declared type wins.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{AcceptHeader, MediaType};
	///
	/// let available = vec![
	///     MediaType::new("text", "html"),
	///     MediaType::new("application", "xml"),
	/// ];
	///
	/// let accept = AcceptHeader::parse(Some("application/json, text/html"));
	/// assert_eq!(accept.acceptable_media_type(&available), Some(MediaType::new("text", "html")));
	///
	/// let no_match = AcceptHeader::parse(Some("application/json"));
	/// assert_eq!(no_match.acceptable_media_type(&available), None);
	///
	/// let absent = AcceptHeader::parse(None);
	/// assert_eq!(absent.acceptable_media_type(&available), Some(MediaType::new("text", "html")));
	/// ```
	pub fn acceptable_media_type(&self, available: &[MediaType]) -> Option<MediaType> {
		if self.is_empty() {
			return available.first().cloned();
		}

		let chosen = self
			.media_types
			.iter()
			.find_map(|accepted| {
				available
					.iter()
					.find(|available_type| self.accepts(accepted, available_type))
			})
			.cloned();

		tracing::debug!(
			preferences = ?self.media_types,
			?available,
			?chosen,
			"negotiated media type"
		);
		chosen
	}
}

impl Default for AcceptHeader {
	fn default() -> Self {
		Self::empty()
	}
}
