//! 国际化（i18n）模块
//!
//! Texts of the import seed phrase page. Plain structs checked at compile
//! time; the language is picked from `ImportConfig`.

mod en_us;
mod keys;
mod zh_cn;

pub use keys::{ImportTexts, TipSection};

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::ZhCn]
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 获取指定语言的翻译
pub fn texts(language: Language) -> &'static ImportTexts {
    match language {
        Language::EnUs => &en_us::TEXTS,
        Language::ZhCn => &zh_cn::TEXTS,
    }
}
