//! ISO 4217 currency data known to the engines.

/// One currency entry
#[derive(Debug)]
pub struct CurrencyData {
    /// ISO 4217 code
    pub code: &'static str,
    /// Symbol shown outside the currency's home regions
    pub symbol: &'static str,
    /// Symbol shown inside the home regions
    pub local_symbol: &'static str,
    /// Regions where `local_symbol` applies
    pub home_regions: &'static [&'static str],
    /// Default number of fraction digits
    pub fraction_digits: u32,
}

impl CurrencyData {
    /// The symbol a locale in `region` displays for this currency
    pub fn symbol_for(&self, region: Option<&str>) -> &'static str {
        match region {
            Some(region)
                if self
                    .home_regions
                    .iter()
                    .any(|home| home.eq_ignore_ascii_case(region)) =>
            {
                self.local_symbol
            }
            _ => self.symbol,
        }
    }
}

macro_rules! currency {
    ($code:literal, $symbol:literal, $local:literal, [$($region:literal),*], $digits:literal) => {
        CurrencyData {
            code: $code,
            symbol: $symbol,
            local_symbol: $local,
            home_regions: &[$($region),*],
            fraction_digits: $digits,
        }
    };
}

static CURRENCIES: &[CurrencyData] = &[
    currency!("AUD", "A$", "$", ["AU"], 2),
    currency!("BRL", "R$", "R$", ["BR"], 2),
    currency!("CAD", "CA$", "$", ["CA"], 2),
    currency!("CHF", "CHF", "CHF", ["CH", "LI"], 2),
    currency!("CNY", "CN¥", "¥", ["CN"], 2),
    currency!("CZK", "CZK", "Kč", ["CZ"], 2),
    currency!("DKK", "DKK", "kr.", ["DK"], 2),
    currency!("EUR", "€", "€", ["AT", "BE", "DE", "ES", "FI", "FR", "GR", "IE", "IT", "NL", "PT"], 2),
    currency!("GBP", "£", "£", ["GB"], 2),
    currency!("HKD", "HK$", "HK$", ["HK"], 2),
    currency!("HUF", "HUF", "Ft", ["HU"], 2),
    currency!("ILS", "₪", "₪", ["IL"], 2),
    currency!("INR", "₹", "₹", ["IN"], 2),
    currency!("JPY", "¥", "￥", ["JP"], 0),
    currency!("KRW", "₩", "₩", ["KR"], 0),
    currency!("MXN", "MX$", "$", ["MX"], 2),
    currency!("NOK", "NOK", "kr", ["NO"], 2),
    currency!("NZD", "NZ$", "$", ["NZ"], 2),
    currency!("PLN", "PLN", "zł", ["PL"], 2),
    currency!("RUB", "RUB", "₽", ["RU"], 2),
    currency!("SEK", "SEK", "kr", ["SE"], 2),
    currency!("SGD", "SGD", "$", ["SG"], 2),
    currency!("THB", "THB", "฿", ["TH"], 2),
    currency!("TRY", "TRY", "₺", ["TR"], 2),
    currency!("USD", "US$", "$", ["US", "PR", "EC"], 2),
    currency!("XTS", "XTS", "XTS", [], 2),
    currency!("XXX", "¤", "¤", [], 0),
    currency!("ZAR", "ZAR", "R", ["ZA"], 2),
];

/// Look a currency up by its exact ISO code
pub fn lookup(code: &str) -> Option<&'static CurrencyData> {
    CURRENCIES
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|index| &CURRENCIES[index])
}

/// The currency a region uses by default
pub fn default_for_region(region: &str) -> Option<&'static CurrencyData> {
    let region = region.to_ascii_uppercase();
    let code = match region.as_str() {
        "US" | "PR" | "EC" => "USD",
        "GB" => "GBP",
        "AT" | "BE" | "DE" | "ES" | "FI" | "FR" | "GR" | "IE" | "IT" | "NL" | "PT" => "EUR",
        "AU" => "AUD",
        "BR" => "BRL",
        "CA" => "CAD",
        "CH" | "LI" => "CHF",
        "CN" => "CNY",
        "IN" => "INR",
        "JP" => "JPY",
        "KR" => "KRW",
        "MX" => "MXN",
        "SE" => "SEK",
        _ => return None,
    };
    lookup(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(CURRENCIES.windows(2).all(|pair| pair[0].code < pair[1].code));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("USD").is_some());
        assert!(lookup("usd").is_none());
        assert!(lookup("ZZZ").is_none());
    }

    #[test]
    fn test_symbol_depends_on_region() {
        let usd = lookup("USD").unwrap();
        assert_eq!(usd.symbol_for(Some("US")), "$");
        assert_eq!(usd.symbol_for(Some("GB")), "US$");
        assert_eq!(usd.symbol_for(None), "US$");
    }

    #[test]
    fn test_region_defaults() {
        assert_eq!(default_for_region("be").map(|c| c.code), Some("EUR"));
        assert!(default_for_region("ZZ").is_none());
    }
}
