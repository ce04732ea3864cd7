//! 翻译键定义

/// Texts of the import seed phrase page
pub struct ImportTexts {
    pub title: &'static str,
    /// Fallback when the wallet service gives no message
    pub seed_phrase_invalid: &'static str,
    pub passphrase_placeholder: &'static str,
    pub confirm: &'static str,
    pub what_is_a_seed_phrase: TipSection,
    pub is_it_safe_to_import: TipSection,
}

/// Question/answer tip shown under the inputs
pub struct TipSection {
    pub question: &'static str,
    pub answer: &'static str,
}
