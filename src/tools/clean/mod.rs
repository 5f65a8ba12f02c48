mod utils;

use utils::*;

/// Clean a display string (restaurant or item name).
///
/// Performs the following operations in order:
/// 1. Normalize Unicode to NFC (canonical composition)
/// 2. Remove zero-width characters
/// 3. Remove control characters
/// 4. Normalize whitespace (collapse runs, trim)
///
/// # Examples
/// ```
/// use menucrawl::tools::clean::clean;
///
/// let dirty = "  Phở\u{200B} Bò\n  Tái ";
/// assert_eq!(clean(dirty), "Phở Bò Tái");
/// ```
pub fn clean(text: &str) -> String {
    let result = normalize_unicode(text);
    let result = remove_zero_width_chars(&result);
    let result = remove_control_chars(&result);
    normalize_whitespace(&result)
}

/// Clean a raw price string without touching its currency formatting.
///
/// Unlike [`clean`] this skips Unicode normalization, so separators and
/// currency symbols stay exactly as the page rendered them.
///
/// # Examples
/// ```
/// use menucrawl::tools::clean::clean_price;
///
/// assert_eq!(clean_price(" 25.000\u{00A0}₫ "), "25.000 ₫");
/// ```
pub fn clean_price(text: &str) -> String {
    let result = remove_zero_width_chars(text);
    let result = remove_control_chars(&result);
    normalize_whitespace(&result)
}
