use phf::{Map, phf_map};

/// ISO 3166-1 alpha-2 code (lowercase) → English short name.
static COUNTRIES: Map<&'static str, &'static str> = phf_map! {
    "ir" => "Iran",
    "af" => "Afghanistan",
    "tj" => "Tajikistan",
    "iq" => "Iraq",
    "tr" => "Turkey",
    "am" => "Armenia",
    "az" => "Azerbaijan",
    "tm" => "Turkmenistan",
    "pk" => "Pakistan",
    "ae" => "United Arab Emirates",
    "om" => "Oman",
    "qa" => "Qatar",
    "kw" => "Kuwait",
    "bh" => "Bahrain",
    "sa" => "Saudi Arabia",
};

/// Every known country, keyed by lowercase alpha-2 code.
#[inline]
pub fn countries() -> &'static Map<&'static str, &'static str> {
    &COUNTRIES
}

/// Country name for a two-letter code, case-insensitive.
///
/// ```
/// assert_eq!(harf::country_name("IR"), Some("Iran"));
/// assert_eq!(harf::country_name("xx"), None);
/// ```
pub fn country_name(code: &str) -> Option<&'static str> {
    if code.len() != 2 || !code.is_ascii() {
        return None;
    }
    let mut lower = [0u8; 2];
    lower.copy_from_slice(code.as_bytes());
    lower.make_ascii_lowercase();
    let lower = std::str::from_utf8(&lower).ok()?;
    COUNTRIES.get(lower).copied()
}
