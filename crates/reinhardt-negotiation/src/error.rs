//! Negotiation errors
//!
//! Client headers never produce errors: malformed segments are dropped while
//! parsing. The variants here describe server-side configuration mistakes and
//! the "not acceptable" outcome for callers that prefer `?` over `Option`.

/// Result type for negotiation operations
pub type NegotiationResult<T> = Result<T, NegotiationError>;

/// Errors raised by the negotiation layer
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NegotiationError {
	/// None of the available options satisfies the client's preferences
	#[error("not acceptable: no available option satisfies the {header} header")]
	NotAcceptable {
		/// Name of the request header that could not be satisfied
		header: &'static str,
	},

	/// A media type declared by the server could not be parsed
	#[error("invalid media type: '{0}'")]
	InvalidMediaType(String),

	/// A language tag declared by the server is not a recognized tag/region pair
	#[error("invalid language tag: '{0}'")]
	InvalidLanguageTag(String),

	/// A content coding declared by the server is empty or malformed
	#[error("invalid content coding: '{0}'")]
	InvalidEncoding(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn not_acceptable_names_the_header() {
		// Arrange
		let err = NegotiationError::NotAcceptable {
			header: "Accept-Language",
		};

		// Act
		let message = err.to_string();

		// Assert
		assert_eq!(
			message,
			"not acceptable: no available option satisfies the Accept-Language header"
		);
	}

	#[rstest]
	#[case(NegotiationError::InvalidMediaType("*/html".into()), "invalid media type: '*/html'")]
	#[case(NegotiationError::InvalidLanguageTag("xx-YY".into()), "invalid language tag: 'xx-YY'")]
	#[case(NegotiationError::InvalidEncoding("".into()), "invalid content coding: ''")]
	fn configuration_errors_display_the_offending_value(
		#[case] err: NegotiationError,
		#[case] expected: &str,
	) {
		assert_eq!(err.to_string(), expected);
	}
}
