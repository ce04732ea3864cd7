//! 简体中文翻译 (zh-CN)

use super::keys::{ImportTexts, TipSection};

pub const TEXTS: ImportTexts = ImportTexts {
    title: "导入助记词",
    seed_phrase_invalid: "助记词无效，请检查！",
    passphrase_placeholder: "密码短语",
    confirm: "确认",
    what_is_a_seed_phrase: TipSection {
        question: "什么是助记词？",
        answer: "由 12、18 或 24 个单词组成的短语，用于控制你的资产。",
    },
    is_it_safe_to_import: TipSection {
        question: "导入是否安全？",
        answer: "是的，它只会保存在你的设备本地，且只有你可以访问。",
    },
};
