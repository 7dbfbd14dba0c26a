//! Name folding for the fallback matcher.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a display name to a comparison key.
///
/// Lower-cases, decomposes (NFD) and drops combining marks. Case folding runs
/// first because some lowercase mappings (e.g. `İ`) emit a combining mark of
/// their own. Punctuation and spacing are kept, so "Côte d'Ivoire" becomes
/// "cote d'ivoire".
///
/// # Examples
///
/// ```
/// use gv_enrichment::normalize_name;
///
/// assert_eq!(normalize_name("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(normalize_name("São Tomé and Príncipe"), "sao tome and principe");
/// assert_eq!(normalize_name(""), "");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
