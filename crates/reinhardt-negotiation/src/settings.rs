//! Negotiation settings
//!
//! Declares the representations a server can produce. Entries are kept as
//! strings so they can be loaded from any serde format and are validated when
//! converted to typed values.

use crate::encoding::{IDENTITY, normalize_coding};
use crate::error::{NegotiationError, NegotiationResult};
use crate::language::Lang;
use crate::media_type::MediaType;
use serde::{Deserialize, Serialize};

/// Server-side declaration of available encodings, media types and languages
///
/// Each list is in server preference order; the first media type is the
/// default when a request carries no `Accept` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationSettings {
	/// Content codings the server can apply (e.g. "gzip", "br", "identity")
	pub encodings: Vec<String>,

	/// Media types the server can produce (e.g. "application/json")
	pub media_types: Vec<String>,

	/// Languages the server can produce (e.g. "en", "pt-BR")
	pub languages: Vec<String>,
}

impl Default for NegotiationSettings {
	fn default() -> Self {
		Self {
			encodings: vec![IDENTITY.to_string()],
			media_types: vec!["application/json".to_string()],
			languages: Vec::new(),
		}
	}
}

impl NegotiationSettings {
	/// Create new settings with the default declarations
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::new();
	/// assert_eq!(settings.encodings, vec!["identity"]);
	/// assert_eq!(settings.media_types, vec!["application/json"]);
	/// assert!(settings.languages.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the available content codings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::new().with_encodings(["br", "gzip", "identity"]);
	/// assert_eq!(settings.encodings, vec!["br", "gzip", "identity"]);
	/// ```
	pub fn with_encodings<I, S>(mut self, encodings: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.encodings = encodings.into_iter().map(Into::into).collect();
		self
	}

	/// Set the available media types
	pub fn with_media_types<I, S>(mut self, media_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.media_types = media_types.into_iter().map(Into::into).collect();
		self
	}

	/// Set the available languages
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{Lang, NegotiationSettings};
	///
	/// let settings = NegotiationSettings::new().with_languages(["en", "pt-BR"]);
	/// assert_eq!(
	///     settings.languages().unwrap(),
	///     vec![Lang::new("en"), Lang::with_region("pt", "BR")]
	/// );
	/// ```
	pub fn with_languages<I, S>(mut self, languages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.languages = languages.into_iter().map(Into::into).collect();
		self
	}

	/// Validated, normalized content codings
	pub fn encodings(&self) -> NegotiationResult<Vec<String>> {
		self.encodings
			.iter()
			.map(|raw| {
				let coding = normalize_coding(raw);
				let valid = !coding.is_empty()
					&& coding != crate::encoding::WILDCARD
					&& coding
						.bytes()
						.all(|b| b.is_ascii_alphanumeric() || b"!#$%&'+.^_`|~-".contains(&b));
				if valid {
					Ok(coding)
				} else {
					Err(NegotiationError::InvalidEncoding(raw.clone()))
				}
			})
			.collect()
	}

	/// Validated media types; ranges such as `text/*` are rejected
	pub fn media_types(&self) -> NegotiationResult<Vec<MediaType>> {
		self.media_types
			.iter()
			.map(|raw| match raw.parse::<MediaType>() {
				Ok(media) if !media.is_range() => Ok(media),
				_ => Err(NegotiationError::InvalidMediaType(raw.clone())),
			})
			.collect()
	}

	/// Validated languages; the wildcard is rejected
	pub fn languages(&self) -> NegotiationResult<Vec<Lang>> {
		self.languages
			.iter()
			.map(|raw| match raw.parse::<Lang>() {
				Ok(lang) if !lang.is_wildcard() => Ok(lang),
				_ => Err(NegotiationError::InvalidLanguageTag(raw.clone())),
			})
			.collect()
	}
}
