use reinhardt_negotiation::encoding::{AcceptEncoding, normalize_coding};
use reinhardt_negotiation::{Negotiator, Preference};
use rstest::rstest;

#[test]
fn test_encoding_parse_simple() {
	let accept = AcceptEncoding::parse(Some("gzip"));
	assert_eq!(accept.preferences(), &[Preference::new("gzip".to_string())]);
}

#[test]
fn test_encoding_parse_with_quality() {
	let accept = AcceptEncoding::parse(Some("gzip;q=0.9"));
	assert_eq!(accept.preferences()[0].value, "gzip");
	assert_eq!(accept.preferences()[0].quality, 0.9);
}

#[test]
fn test_normalize_coding() {
	assert_eq!(normalize_coding("gzip"), "gzip");
	assert_eq!(normalize_coding("x-gzip"), "gzip");
	assert_eq!(normalize_coding("BR"), "br");
	assert_eq!(normalize_coding("Identity"), "identity");
}

#[test]
fn test_identity_ordering_law() {
	let accept =
		AcceptEncoding::parse(Some("identity;q=1.0, a;q=1.0, b;q=1.0, identity;q=0.8, b2;q=0.8"));
	let order: Vec<String> = accept.preferences().iter().map(|p| p.to_string()).collect();
	assert_eq!(order, vec!["a", "b", "identity", "b2;q=0.8", "identity;q=0.8"]);
}

#[test]
fn test_negotiator_simple() {
	let negotiator = Negotiator::new(None, Some("gzip"), None);
	let result = negotiator.acceptable_encoding(&["gzip", "identity"]);
	assert_eq!(result, Some("gzip".to_string()));
}

#[test]
fn test_negotiator_multiple_encodings() {
	let negotiator = Negotiator::new(None, Some("gzip, br, deflate"), None);

	// Client accepts multiple with equal quality, first match in client's list wins
	let result = negotiator.acceptable_encoding(&["br", "gzip", "identity"]);
	assert_eq!(result, Some("gzip".to_string()));
}

#[test]
fn test_negotiator_with_quality() {
	let negotiator = Negotiator::new(None, Some("gzip;q=0.5, identity;q=1.0"), None);

	// Client prefers identity over gzip
	let result = negotiator.acceptable_encoding(&["gzip", "identity"]);
	assert_eq!(result, Some("identity".to_string()));
}

#[test]
fn test_negotiator_identity_fallback() {
	let negotiator = Negotiator::new(None, Some("br, gzip, deflate"), None);

	// Client requests unavailable encodings, identity is still implicitly acceptable
	let result = negotiator.acceptable_encoding(&["identity"]);
	assert_eq!(result, Some("identity".to_string()));
}

#[test]
fn test_negotiator_complex_scenario() {
	let negotiator = Negotiator::new(
		None,
		Some("br;q=0.9, gzip;q=0.8, deflate;q=0.7, identity;q=0.1"),
		None,
	);

	let result = negotiator.acceptable_encoding(&["gzip", "br", "deflate"]);
	assert_eq!(result, Some("br".to_string())); // Highest quality available
}

#[rstest]
#[case(None, &["identity"], Some("identity"))]
#[case(None, &["gzip", "deflate"], None)]
#[case(Some("identity;q=0"), &["identity"], None)]
#[case(Some("identity;q=0"), &["gzip", "identity", "deflate"], None)]
#[case(Some("*;q=0, gzip"), &["identity", "deflate", "gzip"], Some("gzip"))]
#[case(Some("*;q=0"), &["identity", "gzip"], None)]
#[case(Some("*"), &["deflate", "gzip"], Some("deflate"))]
#[case(Some("gzip"), &[], None)]
fn test_acceptable_encoding_table(
	#[case] header: Option<&str>,
	#[case] available: &[&str],
	#[case] expected: Option<&str>,
) {
	let negotiator = Negotiator::new(None, header, None);
	assert_eq!(
		negotiator.acceptable_encoding(available),
		expected.map(str::to_string)
	);
}

#[test]
fn test_require_encoding_reports_not_acceptable() {
	let negotiator = Negotiator::new(None, Some("identity;q=0"), None);
	let err = negotiator.require_encoding(&["identity"]).unwrap_err();
	assert_eq!(
		err.to_string(),
		"not acceptable: no available option satisfies the Accept-Encoding header"
	);
}
