use isocountry::CountryCode;

use crate::country::parse_country_code;

/// Retailer domains searched for a market, most important first.
fn domains_for(code: CountryCode) -> &'static [&'static str] {
    match code {
        CountryCode::USA => &[
            "amazon.com",
            "walmart.com",
            "bestbuy.com",
            "target.com",
            "newegg.com",
            "ebay.com",
            "costco.com",
        ],
        CountryCode::CAN => &["amazon.ca", "bestbuy.ca", "walmart.ca", "canadiantire.ca", "newegg.ca"],
        CountryCode::MEX => &["amazon.com.mx", "mercadolibre.com.mx", "liverpool.com.mx"],
        CountryCode::BRA => &["amazon.com.br", "mercadolivre.com.br", "magazineluiza.com.br", "americanas.com.br"],
        CountryCode::ARG => &["mercadolibre.com.ar", "fravega.com"],
        CountryCode::CHL => &["mercadolibre.cl", "falabella.com"],
        CountryCode::GBR => &["amazon.co.uk", "argos.co.uk", "currys.co.uk", "johnlewis.com", "ebay.co.uk"],
        CountryCode::DEU => &["amazon.de", "otto.de", "mediamarkt.de", "saturn.de", "idealo.de"],
        CountryCode::FRA => &["amazon.fr", "fnac.com", "cdiscount.com", "darty.com", "boulanger.com"],
        CountryCode::ITA => &["amazon.it", "mediaworld.it", "unieuro.it", "eprice.it"],
        CountryCode::ESP => &["amazon.es", "elcorteingles.es", "pccomponentes.com", "mediamarkt.es"],
        CountryCode::NLD => &["bol.com", "coolblue.nl", "amazon.nl"],
        CountryCode::SWE => &["elgiganten.se", "komplett.se", "prisjakt.nu"],
        CountryCode::POL => &["allegro.pl", "x-kom.pl", "mediaexpert.pl"],
        CountryCode::CHE => &["digitec.ch", "galaxus.ch", "brack.ch"],
        CountryCode::ARE => &["amazon.ae", "noon.com", "sharafdg.com"],
        CountryCode::SAU => &["amazon.sa", "noon.com", "extra.com"],
        CountryCode::ZAF => &["takealot.com", "makro.co.za", "incredible.co.za"],
        CountryCode::NGA => &["jumia.com.ng", "konga.com"],
        CountryCode::JPN => &["amazon.co.jp", "rakuten.co.jp", "kakaku.com", "yodobashi.com"],
        CountryCode::KOR => &["coupang.com", "gmarket.co.kr", "11st.co.kr"],
        CountryCode::CHN => &["jd.com", "tmall.com", "taobao.com"],
        CountryCode::IND => &["amazon.in", "flipkart.com", "croma.com", "reliancedigital.in"],
        CountryCode::SGP => &["lazada.sg", "shopee.sg", "amazon.sg"],
        CountryCode::AUS => &["amazon.com.au", "jbhifi.com.au", "harveynorman.com.au", "officeworks.com.au"],
        CountryCode::NZL => &["pbtech.co.nz", "noelleeming.co.nz", "thewarehouse.co.nz"],
        _ => &[],
    }
}

/// Returns the retailer domains the search covers for `country`.
/// Unknown or malformed codes map to an empty list.
pub fn get_search_domains(country: &str) -> &'static [&'static str] {
    parse_country_code(country).map(domains_for).unwrap_or(&[])
}
