//! # Reinhardt Conneg
//!
//! Content negotiation for Reinhardt applications.
//!
//! This crate is the facade over `reinhardt-negotiation`. Request handling
//! code hands it the `Accept`, `Accept-Encoding` and `Accept-Language`
//! headers of a request together with what the server can produce, and gets
//! back the representation to send, or nothing when the client would refuse
//! every option (typically answered with `406 Not Acceptable`).
//!
//! ## Feature Flags
//!
//! - `settings` - Serde-backed [`NegotiationSettings`](prelude::NegotiationSettings)
//! - `full` (default) - All features enabled
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_conneg::prelude::*;
//!
//! let negotiator = Negotiator::new(
//!     Some("application/json;q=0.9, */*;q=0.1"),
//!     Some("br, gzip;q=0.8"),
//!     Some("ja, en;q=0.5"),
//! );
//!
//! let settings = NegotiationSettings::new()
//!     .with_media_types(["text/html", "application/json"])
//!     .with_encodings(["gzip", "identity"])
//!     .with_languages(["en-US", "ja-JP"]);
//!
//! let content = negotiator.negotiate(&settings).unwrap();
//! assert_eq!(content.media_type, Some(MediaType::new("application", "json")));
//! assert_eq!(content.encoding.as_deref(), Some("gzip"));
//! assert_eq!(content.language, Some(Lang::with_region("ja", "JP")));
//!
//! let mut response = http::HeaderMap::new();
//! content.apply_to(&mut response);
//! assert_eq!(response["content-language"], "ja-JP");
//! ```

pub use reinhardt_negotiation as negotiation;

pub use reinhardt_negotiation::{
	AcceptEncoding, AcceptHeader, AcceptLanguage, Lang, MediaType, NegotiatedContent,
	NegotiationError, NegotiationResult, Negotiator, Preference,
};

#[cfg(feature = "settings")]
pub use reinhardt_negotiation::NegotiationSettings;

/// Commonly used types
pub mod prelude {
	pub use crate::{
		Lang, MediaType, NegotiatedContent, NegotiationError, NegotiationResult, Negotiator,
	};

	#[cfg(feature = "settings")]
	pub use crate::NegotiationSettings;
}
