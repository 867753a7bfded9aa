//! Bundled ISO 4217 currency catalog.
//!
//! Decimal digits follow the conventional display precision of each
//! currency, which is not always its ISO minor unit (e.g. IDR and HUF are
//! displayed without fractions).

use storefront_shared::CurrencyDescriptor;

/// A compile-time catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Uppercase ISO 4217 code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Symbol in the currency's home locale.
    pub symbol_native: &'static str,
    /// Display decimal digits.
    pub decimal_digits: u32,
}

impl CatalogEntry {
    const fn new(
        code: &'static str,
        name: &'static str,
        symbol_native: &'static str,
        decimal_digits: u32,
    ) -> Self {
        Self {
            code,
            name,
            symbol_native,
            decimal_digits,
        }
    }

    /// Converts the entry into an owned descriptor.
    #[must_use]
    pub fn to_descriptor(&self) -> CurrencyDescriptor {
        CurrencyDescriptor::new(self.code, self.name, self.symbol_native, self.decimal_digits)
    }
}

/// Currencies known without any configuration.
pub const BUNDLED: &[CatalogEntry] = &[
    CatalogEntry::new("AED", "United Arab Emirates Dirham", "د.إ.‏", 2),
    CatalogEntry::new("ARS", "Argentine Peso", "$", 2),
    CatalogEntry::new("AUD", "Australian Dollar", "$", 2),
    CatalogEntry::new("BGN", "Bulgarian Lev", "лв.", 2),
    CatalogEntry::new("BHD", "Bahraini Dinar", "د.ب.‏", 3),
    CatalogEntry::new("BRL", "Brazilian Real", "R$", 2),
    CatalogEntry::new("CAD", "Canadian Dollar", "$", 2),
    CatalogEntry::new("CHF", "Swiss Franc", "CHF", 2),
    CatalogEntry::new("CLP", "Chilean Peso", "$", 0),
    CatalogEntry::new("CNY", "Chinese Yuan", "CN¥", 2),
    CatalogEntry::new("COP", "Colombian Peso", "$", 0),
    CatalogEntry::new("CZK", "Czech Republic Koruna", "Kč", 2),
    CatalogEntry::new("DKK", "Danish Krone", "kr", 2),
    CatalogEntry::new("EGP", "Egyptian Pound", "ج.م.‏", 2),
    CatalogEntry::new("EUR", "Euro", "€", 2),
    CatalogEntry::new("GBP", "British Pound Sterling", "£", 2),
    CatalogEntry::new("HKD", "Hong Kong Dollar", "$", 2),
    CatalogEntry::new("HUF", "Hungarian Forint", "Ft", 0),
    CatalogEntry::new("IDR", "Indonesian Rupiah", "Rp", 0),
    CatalogEntry::new("ILS", "Israeli New Sheqel", "₪", 2),
    CatalogEntry::new("INR", "Indian Rupee", "₹", 2),
    CatalogEntry::new("IQD", "Iraqi Dinar", "د.ع.‏", 0),
    CatalogEntry::new("ISK", "Icelandic Króna", "kr", 0),
    CatalogEntry::new("JOD", "Jordanian Dinar", "د.أ.‏", 3),
    CatalogEntry::new("JPY", "Japanese Yen", "￥", 0),
    CatalogEntry::new("KRW", "South Korean Won", "₩", 0),
    CatalogEntry::new("KWD", "Kuwaiti Dinar", "د.ك.‏", 3),
    CatalogEntry::new("LYD", "Libyan Dinar", "د.ل.‏", 3),
    CatalogEntry::new("MXN", "Mexican Peso", "$", 2),
    CatalogEntry::new("MYR", "Malaysian Ringgit", "RM", 2),
    CatalogEntry::new("NGN", "Nigerian Naira", "₦", 2),
    CatalogEntry::new("NOK", "Norwegian Krone", "kr", 2),
    CatalogEntry::new("NZD", "New Zealand Dollar", "$", 2),
    CatalogEntry::new("OMR", "Omani Rial", "ر.ع.‏", 3),
    CatalogEntry::new("PHP", "Philippine Peso", "₱", 2),
    CatalogEntry::new("PKR", "Pakistani Rupee", "₨", 0),
    CatalogEntry::new("PLN", "Polish Zloty", "zł", 2),
    CatalogEntry::new("PYG", "Paraguayan Guarani", "₲", 0),
    CatalogEntry::new("RON", "Romanian Leu", "RON", 2),
    CatalogEntry::new("SAR", "Saudi Riyal", "ر.س.‏", 2),
    CatalogEntry::new("SEK", "Swedish Krona", "kr", 2),
    CatalogEntry::new("SGD", "Singapore Dollar", "$", 2),
    CatalogEntry::new("THB", "Thai Baht", "฿", 2),
    CatalogEntry::new("TND", "Tunisian Dinar", "د.ت.‏", 3),
    CatalogEntry::new("TRY", "Turkish Lira", "TL", 2),
    CatalogEntry::new("TWD", "New Taiwan Dollar", "NT$", 2),
    CatalogEntry::new("UAH", "Ukrainian Hryvnia", "₴", 2),
    CatalogEntry::new("UGX", "Ugandan Shilling", "USh", 0),
    CatalogEntry::new("USD", "US Dollar", "$", 2),
    CatalogEntry::new("VND", "Vietnamese Dong", "₫", 0),
    CatalogEntry::new("XAF", "CFA Franc BEAC", "FCFA", 0),
    CatalogEntry::new("XOF", "CFA Franc BCEAO", "CFA", 0),
    CatalogEntry::new("ZAR", "South African Rand", "R", 2),
];
