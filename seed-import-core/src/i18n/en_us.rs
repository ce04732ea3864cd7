//! 英文翻译 (en-US)

use super::keys::{ImportTexts, TipSection};

pub const TEXTS: ImportTexts = ImportTexts {
    title: "Import Seed Phrase",
    seed_phrase_invalid: "The seed phrase is invalid, please check!",
    passphrase_placeholder: "Passphrase",
    confirm: "Confirm",
    what_is_a_seed_phrase: TipSection {
        question: "What is a Seed Phrase?",
        answer: "A 12, 18, or 24-word phrase used to control your assets.",
    },
    is_it_safe_to_import: TipSection {
        question: "Is it safe to import it?",
        answer: "Yes, it will be stored locally on your device and only accessible to you.",
    },
};
