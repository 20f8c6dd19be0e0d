use std::fmt::Display;

use isocountry::CountryCode;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    MiddleEast,
    Africa,
    Asia,
    Oceania,
}

impl Region {
    fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Europe => "Europe",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a market the analysis pipeline can search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryInfo {
    pub code: CountryCode,
    pub name: &'static str,
    pub region: Region,
    /// ISO 4217 currency code
    pub currency: &'static str,
    pub currency_symbol: &'static str,
    /// ISO 639-1 language code, lowercase
    pub language: &'static str,
    /// Major e-commerce market
    pub popular: bool,
}

macro_rules! country {
    ($code:ident, $name:literal, $region:ident, $currency:literal, $symbol:literal, $language:literal, $popular:literal) => {
        CountryInfo {
            code: CountryCode::$code,
            name: $name,
            region: Region::$region,
            currency: $currency,
            currency_symbol: $symbol,
            language: $language,
            popular: $popular,
        }
    };
}

static COUNTRIES: &[CountryInfo] = &[
    country!(USA, "United States", NorthAmerica, "USD", "$", "en", true),
    country!(CAN, "Canada", NorthAmerica, "CAD", "C$", "en", true),
    country!(MEX, "Mexico", NorthAmerica, "MXN", "$", "es", false),
    country!(BRA, "Brazil", SouthAmerica, "BRL", "R$", "pt", true),
    country!(ARG, "Argentina", SouthAmerica, "ARS", "$", "es", false),
    country!(CHL, "Chile", SouthAmerica, "CLP", "$", "es", false),
    country!(GBR, "United Kingdom", Europe, "GBP", "£", "en", true),
    country!(DEU, "Germany", Europe, "EUR", "€", "de", true),
    country!(FRA, "France", Europe, "EUR", "€", "fr", true),
    country!(ITA, "Italy", Europe, "EUR", "€", "it", true),
    country!(ESP, "Spain", Europe, "EUR", "€", "es", true),
    country!(NLD, "Netherlands", Europe, "EUR", "€", "nl", false),
    country!(SWE, "Sweden", Europe, "SEK", "kr", "sv", false),
    country!(POL, "Poland", Europe, "PLN", "zł", "pl", false),
    country!(CHE, "Switzerland", Europe, "CHF", "CHF", "de", false),
    country!(ARE, "United Arab Emirates", MiddleEast, "AED", "د.إ", "ar", false),
    country!(SAU, "Saudi Arabia", MiddleEast, "SAR", "﷼", "ar", false),
    country!(ZAF, "South Africa", Africa, "ZAR", "R", "en", false),
    country!(NGA, "Nigeria", Africa, "NGN", "₦", "en", false),
    country!(JPN, "Japan", Asia, "JPY", "¥", "ja", true),
    country!(KOR, "South Korea", Asia, "KRW", "₩", "ko", true),
    country!(CHN, "China", Asia, "CNY", "¥", "zh", true),
    country!(IND, "India", Asia, "INR", "₹", "hi", true),
    country!(SGP, "Singapore", Asia, "SGD", "S$", "en", false),
    country!(AUS, "Australia", Oceania, "AUD", "A$", "en", true),
    country!(NZL, "New Zealand", Oceania, "NZD", "NZ$", "en", false),
];

/// Parses a two letter country code, ignoring case and surrounding whitespace.
pub fn parse_country_code(code: &str) -> Option<CountryCode> {
    CountryCode::for_alpha2_caseless(code.trim()).ok()
}

/// Looks up display metadata for an alpha-2 country code.
/// Returns `None` for codes that are malformed or not a supported market.
pub fn get_country_info(code: &str) -> Option<&'static CountryInfo> {
    let code = parse_country_code(code)?;
    COUNTRIES.iter().find(|country| country.code == code)
}

#[cfg(test)]
pub(crate) fn supported_countries() -> impl Iterator<Item = &'static CountryInfo> {
    COUNTRIES.iter()
}
