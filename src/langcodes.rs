//! Language code handling.
//!
//! The aggregator record keeps the source document's 2-letter `xml:lang`
//! codes; the production repository wants 3-letter ISO 639-3 ids. Award
//! titles carry no language tag at all, so their language is detected from
//! the text.

use crate::model::nma::VocabularyRef;

/// Convert a 2-letter ISO 639-1 code to the uppercase ISO 639-3 id.
///
/// Returns `None` for codes with no 639-3 mapping (including `und`); callers
/// drop the language in that case rather than failing the record.
#[must_use]
pub fn lang2_to_lang3(code: &str) -> Option<VocabularyRef> {
    let language = isolang::Language::from_639_1(&code.to_lowercase())?;
    Some(VocabularyRef::new(language.to_639_3().to_uppercase()))
}

/// Detect the 2-letter language code of a text, defaulting to English.
///
/// Detection quality on short award titles is limited; `en` is the agreed
/// fallback for undetectable or unmappable text.
#[must_use]
pub fn detect_lang2(text: &str) -> String {
    whatlang::detect_lang(text)
        .and_then(|lang| isolang::Language::from_639_3(lang.code()))
        .and_then(|language| language.to_639_1())
        .map(str::to_string)
        .unwrap_or_else(|| "en".to_string())
}
