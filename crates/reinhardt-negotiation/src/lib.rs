//! # Reinhardt Negotiation
//!
//! HTTP content negotiation for the Reinhardt framework: picks the media type,
//! content coding and language of a response from the server's available
//! options and the client's `Accept`, `Accept-Encoding` and `Accept-Language`
//! headers (RFC 7231 §5.3).
//!
//! ## Features
//!
//! - Quality-value (`q=`) parsing with lenient handling of malformed input
//! - `Accept-Encoding` with implicit identity and wildcard exclusion rules
//! - `Accept` media ranges ranked by quality and specificity
//! - `Accept-Language` with region fallback and explicit/implicit ranking
//! - A per-request [`Negotiator`] facade over `http::HeaderMap`
//! - Serde-backed [`NegotiationSettings`] (feature `settings`, enabled by default)
//!
//! Malformed client headers never produce errors. Unusable segments are
//! dropped and a header with nothing usable behaves as if it were absent.
//!
//! ## Example
//!
//! ```
//! use http::HeaderMap;
//! use http::header::{ACCEPT, ACCEPT_LANGUAGE};
//! use reinhardt_negotiation::{Lang, MediaType, Negotiator};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(ACCEPT, "text/html, application/xhtml+xml;q=0.9, */*;q=0.8".parse().unwrap());
//! headers.insert(ACCEPT_LANGUAGE, "de-CH, de;q=0.9, en;q=0.8".parse().unwrap());
//!
//! let negotiator = Negotiator::from_headers(&headers);
//!
//! let media = negotiator.acceptable_media_type(&[
//!     MediaType::new("application", "json"),
//!     MediaType::new("text", "html"),
//! ]);
//! assert_eq!(media, Some(MediaType::new("text", "html")));
//!
//! let languages = negotiator.acceptable_languages(&[
//!     Lang::new("en"),
//!     Lang::with_region("de", "DE"),
//! ]);
//! assert_eq!(languages, vec![Lang::with_region("de", "DE"), Lang::new("en")]);
//!
//! // No Accept-Encoding header: only identity is acceptable
//! assert_eq!(negotiator.acceptable_encoding(&["gzip"]), None);
//! ```

pub mod accept;
pub mod encoding;
pub mod error;
pub mod language;
pub mod locale;
pub mod media_type;
pub mod negotiator;
pub mod qvalue;

#[cfg(feature = "settings")]
pub mod settings;

pub use accept::AcceptHeader;
pub use encoding::AcceptEncoding;
pub use error::{NegotiationError, NegotiationResult};
pub use language::{AcceptLanguage, Lang};
pub use media_type::MediaType;
pub use negotiator::{NegotiatedContent, Negotiator};
pub use qvalue::Preference;

#[cfg(feature = "settings")]
pub use settings::NegotiationSettings;
