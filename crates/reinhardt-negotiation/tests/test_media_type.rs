use reinhardt_negotiation::{AcceptHeader, MediaType, Negotiator};
use rstest::rstest;

#[test]
fn test_parse_accept_header() {
	let accept = AcceptHeader::parse(Some("application/json, text/html; q=0.9"));
	assert_eq!(accept.media_types().len(), 2);
	assert_eq!(accept.media_types()[0].value, MediaType::new("application", "json"));
	assert_eq!(accept.media_types()[1].quality, 0.9);
}

#[test]
fn test_specificity_tie_break() {
	let negotiator = Negotiator::new(Some("text/*;q=0.9, text/html;q=0.9"), None, None);
	let available = vec![MediaType::new("text", "plain"), MediaType::new("text", "html")];

	assert_eq!(
		negotiator.acceptable_media_type(&available),
		Some(MediaType::new("text", "html"))
	);
}

#[test]
fn test_no_accept_header_uses_server_default() {
	let negotiator = Negotiator::new(None, None, None);
	let available = vec![
		MediaType::new("text", "html"),
		MediaType::new("application", "json"),
	];

	assert_eq!(
		negotiator.acceptable_media_type(&available),
		Some(MediaType::new("text", "html"))
	);
}

#[test]
fn test_invalid_wildcard_range_is_dropped() {
	let accept = AcceptHeader::parse(Some("*/json, text/plain"));
	assert_eq!(accept.media_types().len(), 1);
	assert_eq!(accept.media_types()[0].value, MediaType::new("text", "plain"));
}

#[rstest]
#[case("application/json", Some(("application", "json")))]
#[case("text/*", Some(("text", "html")))]
#[case("*/*", Some(("application", "json")))]
#[case("image/png", None)]
#[case("application/json;q=0, */*", Some(("text", "html")))]
#[case("application/json;q=0.1, text/html;q=0.2", Some(("text", "html")))]
fn test_acceptable_media_type_table(
	#[case] header: &str,
	#[case] expected: Option<(&str, &str)>,
) {
	let negotiator = Negotiator::new(Some(header), None, None);
	let available = vec![
		MediaType::new("application", "json"),
		MediaType::new("text", "html"),
	];

	assert_eq!(
		negotiator.acceptable_media_type(&available),
		expected.map(MediaType::from)
	);
}

#[test]
fn test_parameters_other_than_quality_are_ignored() {
	let negotiator = Negotiator::new(Some("text/html;level=1;q=0.4, application/json;q=0.3"), None, None);
	let available = vec![
		MediaType::new("application", "json"),
		MediaType::new("text", "html"),
	];

	assert_eq!(
		negotiator.acceptable_media_type(&available),
		Some(MediaType::new("text", "html"))
	);
}
