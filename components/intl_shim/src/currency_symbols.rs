//! ISO 4217 code → narrow currency symbol.
//!
//! Used for `currencyDisplay: "narrowSymbol"` ("$100" rather than "US$100").
//! Codes missing from the table leave the engine's symbol untouched.

static NARROW_SYMBOLS: &[(&str, &str)] = &[
    ("AED", "د.إ"),
    ("AFN", "؋"),
    ("ALL", "L"),
    ("AMD", "֏"),
    ("ANG", "ƒ"),
    ("AOA", "Kz"),
    ("ARS", "$"),
    ("AUD", "$"),
    ("AWG", "ƒ"),
    ("AZN", "₼"),
    ("BAM", "KM"),
    ("BBD", "$"),
    ("BDT", "৳"),
    ("BGN", "лв"),
    ("BHD", ".د.ب"),
    ("BIF", "FBu"),
    ("BMD", "$"),
    ("BND", "$"),
    ("BOB", "$b"),
    ("BRL", "R$"),
    ("BSD", "$"),
    ("BTN", "Nu."),
    ("BWP", "P"),
    ("BYN", "Br"),
    ("BZD", "BZ$"),
    ("CAD", "$"),
    ("CDF", "FC"),
    ("CHF", "CHF"),
    ("CLP", "$"),
    ("CNY", "¥"),
    ("COP", "$"),
    ("CRC", "₡"),
    ("CUP", "₱"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("DOP", "RD$"),
    ("DZD", "دج"),
    ("EGP", "£"),
    ("ETB", "Br"),
    ("EUR", "€"),
    ("FJD", "$"),
    ("GBP", "£"),
    ("GEL", "₾"),
    ("GHS", "GH₵"),
    ("HKD", "$"),
    ("HNL", "L"),
    ("HRK", "kn"),
    ("HUF", "Ft"),
    ("IDR", "Rp"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("IQD", "ع.د"),
    ("IRR", "﷼"),
    ("ISK", "kr"),
    ("JMD", "J$"),
    ("JOD", "JD"),
    ("JPY", "¥"),
    ("KES", "KSh"),
    ("KRW", "₩"),
    ("KWD", "KD"),
    ("KZT", "₸"),
    ("LKR", "₨"),
    ("MAD", "MAD"),
    ("MXN", "$"),
    ("MYR", "RM"),
    ("NGN", "₦"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PEN", "S/."),
    ("PHP", "₱"),
    ("PKR", "₨"),
    ("PLN", "zł"),
    ("QAR", "﷼"),
    ("RON", "lei"),
    ("RSD", "Дин."),
    ("RUB", "₽"),
    ("SAR", "﷼"),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("TWD", "NT$"),
    ("UAH", "₴"),
    ("USD", "$"),
    ("UYU", "$U"),
    ("VND", "₫"),
    ("ZAR", "R"),
];

/// Narrow symbol for an ISO code, matched exactly
pub fn narrow_symbol(code: &str) -> Option<&'static str> {
    NARROW_SYMBOLS
        .binary_search_by(|(known, _)| (*known).cmp(code))
        .ok()
        .map(|index| NARROW_SYMBOLS[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(NARROW_SYMBOLS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(narrow_symbol("USD"), Some("$"));
        assert_eq!(narrow_symbol("EUR"), Some("€"));
        assert_eq!(narrow_symbol("GBP"), Some("£"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(narrow_symbol("XTS"), None);
        assert_eq!(narrow_symbol("usd"), None);
        assert_eq!(narrow_symbol(""), None);
    }
}
