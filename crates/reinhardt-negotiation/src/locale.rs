//! Recognized language tags and their regions
//!
//! Primary tags are ISO 639-1 codes, regions are ISO 3166-1 alpha-2 codes
//! (plus `419` for Latin America). Entries are sorted by tag.

/// `(primary tag, recognized regions)` pairs, sorted by tag
pub static LOCALES: &[(&str, &[&str])] = &[
	("af", &["NA", "ZA"]),
	("am", &["ET"]),
	("ar", &[
		"AE", "BH", "DZ", "EG", "IQ", "JO", "KW", "LB", "LY", "MA", "OM", "QA", "SA", "SD", "SY",
		"TN", "YE",
	]),
	("as", &["IN"]),
	("az", &["AZ"]),
	("be", &["BY"]),
	("bg", &["BG"]),
	("bn", &["BD", "IN"]),
	("bo", &["CN", "IN"]),
	("br", &["FR"]),
	("bs", &["BA"]),
	("ca", &["AD", "ES", "FR", "IT"]),
	("cs", &["CZ"]),
	("cy", &["GB"]),
	("da", &["DK", "GL"]),
	("de", &["AT", "BE", "CH", "DE", "IT", "LI", "LU"]),
	("dz", &["BT"]),
	("el", &["CY", "GR"]),
	("en", &[
		"AG", "AI", "AS", "AU", "BB", "BE", "BM", "BS", "BW", "BZ", "CA", "CK", "CM", "DM", "ER",
		"FJ", "FK", "GB", "GD", "GG", "GH", "GI", "GM", "GU", "GY", "HK", "IE", "IM", "IN", "JE",
		"JM", "KE", "KI", "KN", "KY", "LC", "LR", "LS", "MG", "MH", "MO", "MP", "MS", "MT", "MU",
		"MW", "MY", "NA", "NF", "NG", "NR", "NU", "NZ", "PG", "PH", "PK", "PN", "PR", "PW", "RW",
		"SB", "SC", "SG", "SH", "SL", "SS", "SX", "SZ", "TC", "TK", "TO", "TT", "TV", "TZ", "UG",
		"UM", "US", "VC", "VG", "VI", "VU", "WS", "ZA", "ZM", "ZW",
	]),
	("eo", &[]),
	("es", &[
		"419", "AR", "BO", "BR", "CL", "CO", "CR", "CU", "DO", "EC", "ES", "GQ", "GT", "HN", "MX",
		"NI", "PA", "PE", "PH", "PR", "PY", "SV", "US", "UY", "VE",
	]),
	("et", &["EE"]),
	("eu", &["ES"]),
	("fa", &["AF", "IR"]),
	("fi", &["FI"]),
	("fo", &["DK", "FO"]),
	("fr", &[
		"BE", "BF", "BI", "BJ", "CA", "CD", "CF", "CG", "CH", "CI", "CM", "DJ", "DZ", "FR", "GA",
		"GN", "GP", "HT", "LU", "MA", "MC", "MG", "ML", "MQ", "MU", "NC", "NE", "PF", "RE", "RW",
		"SN", "TD", "TG", "TN", "VU",
	]),
	("ga", &["IE"]),
	("gd", &["GB"]),
	("gl", &["ES"]),
	("gu", &["IN"]),
	("ha", &["GH", "NE", "NG"]),
	("he", &["IL"]),
	("hi", &["IN"]),
	("hr", &["BA", "HR"]),
	("hu", &["HU"]),
	("hy", &["AM"]),
	("id", &["ID"]),
	("ig", &["NG"]),
	("is", &["IS"]),
	("it", &["CH", "IT", "SM", "VA"]),
	("ja", &["JP"]),
	("ka", &["GE"]),
	("kk", &["KZ"]),
	("kl", &["GL"]),
	("km", &["KH"]),
	("kn", &["IN"]),
	("ko", &["KP", "KR"]),
	("ky", &["KG"]),
	("lb", &["LU"]),
	("lo", &["LA"]),
	("lt", &["LT"]),
	("lv", &["LV"]),
	("mg", &["MG"]),
	("mk", &["MK"]),
	("ml", &["IN"]),
	("mn", &["MN"]),
	("mr", &["IN"]),
	("ms", &["BN", "MY", "SG"]),
	("mt", &["MT"]),
	("my", &["MM"]),
	("nb", &["NO", "SJ"]),
	("ne", &["IN", "NP"]),
	("nl", &["AW", "BE", "BQ", "CW", "NL", "SR", "SX"]),
	("nn", &["NO"]),
	("no", &["NO"]),
	("or", &["IN"]),
	("pa", &["IN", "PK"]),
	("pl", &["PL"]),
	("ps", &["AF"]),
	("pt", &["AO", "BR", "CH", "CV", "GQ", "GW", "LU", "MO", "MZ", "PT", "ST", "TL"]),
	("rm", &["CH"]),
	("ro", &["MD", "RO"]),
	("ru", &["BY", "KG", "KZ", "MD", "RU", "UA"]),
	("rw", &["RW"]),
	("si", &["LK"]),
	("sk", &["SK"]),
	("sl", &["SI"]),
	("so", &["DJ", "ET", "KE", "SO"]),
	("sq", &["AL", "MK", "XK"]),
	("sr", &["BA", "ME", "RS", "XK"]),
	("sv", &["AX", "FI", "SE"]),
	("sw", &["CD", "KE", "TZ", "UG"]),
	("ta", &["IN", "LK", "MY", "SG"]),
	("te", &["IN"]),
	("tg", &["TJ"]),
	("th", &["TH"]),
	("ti", &["ER", "ET"]),
	("tk", &["TM"]),
	("tr", &["CY", "TR"]),
	("uk", &["UA"]),
	("ur", &["IN", "PK"]),
	("uz", &["AF", "UZ"]),
	("vi", &["VN"]),
	("yo", &["BJ", "NG"]),
	("zh", &["CN", "HK", "MO", "SG", "TW"]),
	("zu", &["ZA"]),
];

/// Returns the recognized regions for a primary tag, if the tag is known
///
/// Lookups are case-insensitive.
pub fn regions(tag: &str) -> Option<&'static [&'static str]> {
	let tag = tag.to_ascii_lowercase();
	LOCALES
		.binary_search_by(|(known, _)| (*known).cmp(tag.as_str()))
		.ok()
		.map(|index| LOCALES[index].1)
}

/// Returns true when `tag` is a known primary tag and `region`, if given, is one of its regions
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::locale::is_known;
///
/// assert!(is_known("en", None));
/// assert!(is_known("EN", Some("us")));
/// assert!(is_known("es", Some("419")));
/// assert!(!is_known("en", Some("JP")));
/// assert!(!is_known("xx", None));
/// ```
pub fn is_known(tag: &str, region: Option<&str>) -> bool {
	let Some(known_regions) = regions(tag) else {
		return false;
	};
	match region {
		None => true,
		Some(region) => known_regions
			.iter()
			.any(|known| known.eq_ignore_ascii_case(region)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn table_is_sorted_and_unique() {
		for pair in LOCALES.windows(2) {
			assert!(pair[0].0 < pair[1].0, "{} must sort before {}", pair[0].0, pair[1].0);
		}
	}

	#[rstest]
	fn region_lists_are_sorted_and_upper_case() {
		for (tag, regions) in LOCALES {
			for region in *regions {
				assert_eq!(*region, region.to_ascii_uppercase(), "{tag}-{region}");
			}
			for pair in regions.windows(2) {
				assert!(pair[0] < pair[1], "{tag}: {} before {}", pair[0], pair[1]);
			}
		}
	}

	#[rstest]
	#[case("de", Some("CH"), true)]
	#[case("de", Some("ch"), true)]
	#[case("pt", Some("BR"), true)]
	#[case("zh", Some("TW"), true)]
	#[case("eo", None, true)]
	#[case("eo", Some("US"), false)]
	#[case("de", Some("US"), false)]
	#[case("english", None, false)]
	#[case("", None, false)]
	fn known_combinations(#[case] tag: &str, #[case] region: Option<&str>, #[case] expected: bool) {
		assert_eq!(is_known(tag, region), expected);
	}
}
