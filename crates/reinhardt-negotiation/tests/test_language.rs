use reinhardt_negotiation::language::{AcceptLanguage, Lang};
use reinhardt_negotiation::Negotiator;
use rstest::{fixture, rstest};

#[fixture]
fn available() -> Vec<Lang> {
	vec![Lang::new("en"), Lang::new("fr"), Lang::new("ja")]
}

#[test]
fn test_language_parse_simple() {
	let lang = Lang::parse("en").unwrap();
	assert_eq!(lang.tag, "en");
	assert_eq!(lang.region, None);
}

#[test]
fn test_language_parse_with_region() {
	let lang = Lang::parse("en-US").unwrap();
	assert_eq!(lang.tag, "en");
	assert_eq!(lang.region, Some("US".to_string()));
}

#[test]
fn test_accept_language_parse_with_quality() {
	let accept = AcceptLanguage::parse(Some("ja-JP;q=0.8"));
	let pref = &accept.preferences()[0];
	assert_eq!(pref.value, Lang::with_region("ja", "JP"));
	assert_eq!(pref.quality, 0.8);
}

#[test]
fn test_language_tag() {
	assert_eq!(Lang::new("en").to_tag(), "en");
	assert_eq!(Lang::with_region("en", "US").to_tag(), "en-US");
	assert_eq!(Lang::wildcard().to_tag(), "*");
}

#[rstest]
fn test_negotiator_simple(available: Vec<Lang>) {
	let negotiator = Negotiator::new(None, None, Some("fr"));
	assert_eq!(negotiator.acceptable_language(&available), Some(Lang::new("fr")));
}

#[rstest]
fn test_negotiator_with_quality(available: Vec<Lang>) {
	// Higher quality should win
	let negotiator = Negotiator::new(None, None, Some("fr;q=0.5, en;q=0.9"));
	assert_eq!(negotiator.acceptable_language(&available), Some(Lang::new("en")));
}

#[rstest]
fn test_negotiator_with_region() {
	let available = vec![
		Lang::with_region("en", "US"),
		Lang::with_region("en", "GB"),
		Lang::new("fr"),
	];

	// Request for en-GB should match en-GB exactly
	let negotiator = Negotiator::new(None, None, Some("en-GB"));
	assert_eq!(
		negotiator.acceptable_language(&available),
		Some(Lang::with_region("en", "GB"))
	);

	// Request for en should match the first en variant
	let negotiator = Negotiator::new(None, None, Some("en"));
	assert_eq!(
		negotiator.acceptable_language(&available),
		Some(Lang::with_region("en", "US"))
	);
}

#[rstest]
fn test_negotiator_no_match(available: Vec<Lang>) {
	let negotiator = Negotiator::new(None, None, Some("de, es"));
	assert_eq!(negotiator.acceptable_language(&available), None);
	assert!(negotiator.require_language(&available).is_err());
}

#[rstest]
fn test_negotiator_complex(available: Vec<Lang>) {
	let negotiator = Negotiator::new(None, None, Some("ja;q=0.5, fr;q=0.8, en;q=1.0"));
	assert_eq!(
		negotiator.acceptable_languages(&available),
		vec![Lang::new("en"), Lang::new("fr"), Lang::new("ja")]
	);
}

#[rstest]
fn test_acceptable_languages_skips_unmatched(available: Vec<Lang>) {
	let negotiator = Negotiator::new(None, None, Some("en, fr, de"));
	assert_eq!(
		negotiator.acceptable_languages(&available),
		vec![Lang::new("en"), Lang::new("fr")]
	);
}

#[rstest]
fn test_explicit_before_implicit() {
	let negotiator = Negotiator::new(None, None, Some("es, en-US, es"));
	assert_eq!(
		negotiator.acceptable_languages(&[Lang::new("en"), Lang::new("es")]),
		vec![Lang::new("es"), Lang::new("en")]
	);
}

#[rstest]
fn test_bare_tag_fallback() {
	let negotiator = Negotiator::new(None, None, Some("en"));
	assert_eq!(
		negotiator.acceptable_language(&[Lang::with_region("en", "GB")]),
		Some(Lang::with_region("en", "GB"))
	);
}

#[rstest]
fn test_absent_header_accepts_server_order(available: Vec<Lang>) {
	let negotiator = Negotiator::new(None, None, None);
	assert_eq!(negotiator.acceptable_languages(&available), available);
}

#[rstest]
fn test_wildcard_with_exclusion(available: Vec<Lang>) {
	let negotiator = Negotiator::new(None, None, Some("ja, *;q=0.1, en;q=0"));
	assert_eq!(
		negotiator.acceptable_languages(&available),
		vec![Lang::new("ja"), Lang::new("fr")]
	);
}
