//! Per-request negotiation facade
//!
//! [`Negotiator`] keeps the raw `Accept`, `Accept-Encoding` and
//! `Accept-Language` values of one request. Each query parses the relevant
//! header afresh, so a negotiator can be shared freely between threads.

use crate::accept::AcceptHeader;
use crate::encoding::{AcceptEncoding, IDENTITY};
use crate::error::{NegotiationError, NegotiationResult};
use crate::language::{AcceptLanguage, Lang};
use crate::media_type::MediaType;
use http::header::{self, HeaderMap, HeaderValue};

const ACCEPT: &str = "Accept";
const ACCEPT_ENCODING: &str = "Accept-Encoding";
const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Content negotiation bound to one request's headers
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{Lang, MediaType, Negotiator};
///
/// let negotiator = Negotiator::new(
///     Some("text/html;q=0.9, application/json"),
///     Some("gzip, br;q=0.5"),
///     Some("fr-CH, fr;q=0.9, en;q=0.8"),
/// );
///
/// assert_eq!(
///     negotiator.acceptable_media_type(&[MediaType::new("text", "html"), MediaType::new("application", "json")]),
///     Some(MediaType::new("application", "json"))
/// );
/// assert_eq!(negotiator.acceptable_encoding(&["br", "gzip"]), Some("gzip".to_string()));
/// assert_eq!(
///     negotiator.acceptable_language(&[Lang::new("en"), Lang::new("fr")]),
///     Some(Lang::new("fr"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Negotiator {
	accept: Option<String>,
	accept_encoding: Option<String>,
	accept_language: Option<String>,
}

impl Negotiator {
	/// Creates a negotiator from raw header values; `None` means the header was absent
	pub fn new(
		accept: Option<&str>,
		accept_encoding: Option<&str>,
		accept_language: Option<&str>,
	) -> Self {
		Self {
			accept: accept.map(str::to_string),
			accept_encoding: accept_encoding.map(str::to_string),
			accept_language: accept_language.map(str::to_string),
		}
	}

	/// Creates a negotiator from request headers
	///
	/// Repeated header fields are joined with `", "` as RFC 7230 allows.
	/// Non-ASCII bytes are decoded lossily and left to the segment parsers,
	/// which drop whatever they cannot use.
	///
	/// # Examples
	///
	/// ```
	/// use http::HeaderMap;
	/// use http::header::{ACCEPT_ENCODING, ACCEPT_LANGUAGE};
	/// use reinhardt_negotiation::Negotiator;
	///
	/// let mut headers = HeaderMap::new();
	/// headers.append(ACCEPT_ENCODING, "gzip;q=0.5".parse().unwrap());
	/// headers.append(ACCEPT_ENCODING, "br".parse().unwrap());
	/// headers.insert(ACCEPT_LANGUAGE, "de".parse().unwrap());
	///
	/// let negotiator = Negotiator::from_headers(&headers);
	/// assert_eq!(negotiator.accept_encoding(), Some("gzip;q=0.5, br"));
	/// assert_eq!(negotiator.accept(), None);
	/// ```
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self {
			accept: header_value(headers, header::ACCEPT),
			accept_encoding: header_value(headers, header::ACCEPT_ENCODING),
			accept_language: header_value(headers, header::ACCEPT_LANGUAGE),
		}
	}

	/// Raw `Accept` value, if present
	pub fn accept(&self) -> Option<&str> {
		self.accept.as_deref()
	}

	/// Raw `Accept-Encoding` value, if present
	pub fn accept_encoding(&self) -> Option<&str> {
		self.accept_encoding.as_deref()
	}

	/// Raw `Accept-Language` value, if present
	pub fn accept_language(&self) -> Option<&str> {
		self.accept_language.as_deref()
	}

	/// Picks the content coding to apply, or `None` if nothing is acceptable
	pub fn acceptable_encoding<S: AsRef<str>>(&self, availables: &[S]) -> Option<String> {
		AcceptEncoding::parse(self.accept_encoding()).acceptable_encoding(availables)
	}

	/// Picks the media type to produce, or `None` if nothing is acceptable
	pub fn acceptable_media_type(&self, availables: &[MediaType]) -> Option<MediaType> {
		AcceptHeader::parse(self.accept()).acceptable_media_type(availables)
	}

	/// Picks the best language, or `None` if nothing is acceptable
	pub fn acceptable_language(&self, availables: &[Lang]) -> Option<Lang> {
		AcceptLanguage::parse(self.accept_language()).acceptable_language(availables)
	}

	/// Ranks every acceptable language, best first
	pub fn acceptable_languages(&self, availables: &[Lang]) -> Vec<Lang> {
		AcceptLanguage::parse(self.accept_language()).acceptable_languages(availables)
	}

	/// Like [`acceptable_encoding`](Self::acceptable_encoding), failing with `NotAcceptable`
	pub fn require_encoding<S: AsRef<str>>(&self, availables: &[S]) -> NegotiationResult<String> {
		self.acceptable_encoding(availables)
			.ok_or(NegotiationError::NotAcceptable {
				header: ACCEPT_ENCODING,
			})
	}

	/// Like [`acceptable_media_type`](Self::acceptable_media_type), failing with `NotAcceptable`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{MediaType, NegotiationError, Negotiator};
	///
	/// let negotiator = Negotiator::new(Some("image/*"), None, None);
	/// let err = negotiator
	///     .require_media_type(&[MediaType::new("text", "html")])
	///     .unwrap_err();
	/// assert_eq!(err, NegotiationError::NotAcceptable { header: "Accept" });
	/// ```
	pub fn require_media_type(&self, availables: &[MediaType]) -> NegotiationResult<MediaType> {
		self.acceptable_media_type(availables)
			.ok_or(NegotiationError::NotAcceptable {
				header: ACCEPT,
			})
	}

	/// Like [`acceptable_language`](Self::acceptable_language), failing with `NotAcceptable`
	pub fn require_language(&self, availables: &[Lang]) -> NegotiationResult<Lang> {
		self.acceptable_language(availables)
			.ok_or(NegotiationError::NotAcceptable {
				header: ACCEPT_LANGUAGE,
			})
	}

	/// Negotiates every dimension the settings declare
	///
	/// Dimensions with nothing declared stay `None` and do not contribute
	/// to `Vary`.
	#[cfg(feature = "settings")]
	pub fn negotiate(
		&self,
		settings: &crate::settings::NegotiationSettings,
	) -> NegotiationResult<NegotiatedContent> {
		let media_types = settings.media_types()?;
		let encodings = settings.encodings()?;
		let languages = settings.languages()?;

		let mut content = NegotiatedContent::default();
		if !media_types.is_empty() {
			content.media_type = self.acceptable_media_type(&media_types);
			content.vary.push(ACCEPT);
		}
		if !encodings.is_empty() {
			content.encoding = self.acceptable_encoding(&encodings);
			content.vary.push(ACCEPT_ENCODING);
		}
		if !languages.is_empty() {
			content.language = self.acceptable_language(&languages);
			content.vary.push(ACCEPT_LANGUAGE);
		}
		Ok(content)
	}
}

/// The outcome of negotiating every dimension for one response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegotiatedContent {
	/// Chosen media type
	pub media_type: Option<MediaType>,
	/// Chosen content coding
	pub encoding: Option<String>,
	/// Chosen language
	pub language: Option<Lang>,
	/// Request headers that influenced the outcome
	pub vary: Vec<&'static str>,
}

impl NegotiatedContent {
	/// Writes the negotiated representation headers into a response header map
	///
	/// `Content-Encoding` is omitted for identity, and `Vary` is only written
	/// when at least one request header was consulted.
	///
	/// # Examples
	///
	/// ```
	/// use http::HeaderMap;
	/// use reinhardt_negotiation::{Lang, MediaType, NegotiatedContent};
	///
	/// let content = NegotiatedContent {
	///     media_type: Some(MediaType::new("text", "html")),
	///     encoding: Some("identity".to_string()),
	///     language: Some(Lang::with_region("en", "GB")),
	///     vary: vec!["Accept", "Accept-Language"],
	/// };
	///
	/// let mut headers = HeaderMap::new();
	/// content.apply_to(&mut headers);
	/// assert_eq!(headers["content-type"], "text/html");
	/// assert_eq!(headers["content-language"], "en-GB");
	/// assert_eq!(headers["vary"], "Accept, Accept-Language");
	/// assert!(!headers.contains_key("content-encoding"));
	/// ```
	pub fn apply_to(&self, headers: &mut HeaderMap) {
		if let Some(media_type) = &self.media_type {
			insert(headers, header::CONTENT_TYPE, &media_type.to_string());
		}
		if let Some(encoding) = &self.encoding
			&& encoding != IDENTITY
		{
			insert(headers, header::CONTENT_ENCODING, encoding);
		}
		if let Some(language) = &self.language {
			insert(headers, header::CONTENT_LANGUAGE, &language.to_tag());
		}
		if !self.vary.is_empty() {
			insert(headers, header::VARY, &self.vary.join(", "));
		}
	}

	/// Returns true when every negotiated dimension found a match
	pub fn is_acceptable(&self) -> bool {
		let matched = [
			self.media_type.is_some(),
			self.encoding.is_some(),
			self.language.is_some(),
		]
		.into_iter()
		.filter(|matched| *matched)
		.count();
		matched == self.vary.len()
	}
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
	let values: Vec<String> = headers
		.get_all(&name)
		.iter()
		.map(|value| {
			let decoded = String::from_utf8_lossy(value.as_bytes());
			if value.to_str().is_err() {
				tracing::trace!(header = %name, value = %decoded, "header value contains non-ASCII bytes");
			}
			decoded.trim().to_string()
		})
		.collect();
	if values.is_empty() {
		None
	} else {
		Some(values.join(", "))
	}
}

fn insert(headers: &mut HeaderMap, name: header::HeaderName, value: &str) {
	match HeaderValue::from_str(value) {
		Ok(value) => {
			headers.insert(name, value);
		}
		Err(_) => tracing::warn!(header = %name, value, "skipping invalid response header value"),
	}
}
