//! Seed phrase form state

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CoreResult;

/// Form field holding the space-joined seed words
pub const MNEMONICS_FIELD: &str = "mnemonics";
/// Form field holding the optional BIP-39 passphrase
pub const PASSPHRASE_FIELD: &str = "passphrase";

/// Current values of the import form
///
/// `mnemonics` and `passphrase` are wiped from memory when the value is
/// dropped. Any other field the input widget keeps (word count selection and
/// the like) lives in `extra` and is treated as non-secret.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct FormState {
    /// Space-joined word sequence
    #[serde(default)]
    pub mnemonics: String,
    /// Optional passphrase, empty when not used
    #[serde(default)]
    pub passphrase: String,
    /// Non-secret widget fields
    #[serde(flatten)]
    #[zeroize(skip)]
    pub extra: BTreeMap<String, Value>,
}

impl FormState {
    /// 创建只包含助记词和密码的表单
    #[must_use]
    pub fn new(mnemonics: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            mnemonics: mnemonics.into(),
            passphrase: passphrase.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Wipe the passphrase and leave it empty.
    pub fn clear_passphrase(&mut self) {
        self.passphrase.zeroize();
    }

    /// Wipe both secret fields, keep the non-secret ones.
    pub fn clear_secrets(&mut self) {
        self.mnemonics.zeroize();
        self.passphrase.zeroize();
    }

    /// Apply a partial edit reported by the form.
    pub fn apply(&mut self, mut patch: FormPatch) {
        if let Some(mnemonics) = patch.mnemonics.take() {
            self.mnemonics.zeroize();
            self.mnemonics = mnemonics;
        }
        if let Some(passphrase) = patch.passphrase.take() {
            self.passphrase.zeroize();
            self.passphrase = passphrase;
        }
        self.extra.append(&mut patch.extra);
    }

    /// Serialize the whole form into the `states` object of a cache entry.
    ///
    /// With `scrub_secrets` the secret fields are written as empty strings.
    #[must_use]
    pub fn to_cached_states(&self, scrub_secrets: bool) -> Map<String, Value> {
        let mut states: Map<String, Value> = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let (mnemonics, passphrase) = if scrub_secrets {
            (String::new(), String::new())
        } else {
            (self.mnemonics.clone(), self.passphrase.clone())
        };
        states.insert(MNEMONICS_FIELD.to_string(), Value::String(mnemonics));
        states.insert(PASSPHRASE_FIELD.to_string(), Value::String(passphrase));
        states
    }

    /// Rebuild a form from cached `states`.
    ///
    /// Secret fields are never restored, whatever the cache holds for them.
    pub fn from_cached_states(states: &Map<String, Value>) -> CoreResult<Self> {
        let mut states = states.clone();
        if let Some(Value::String(mut secret)) = states.remove(MNEMONICS_FIELD) {
            secret.zeroize();
        }
        if let Some(Value::String(mut secret)) = states.remove(PASSPHRASE_FIELD) {
            secret.zeroize();
        }
        let extra: BTreeMap<String, Value> = serde_json::from_value(Value::Object(states))?;
        Ok(Self {
            mnemonics: String::new(),
            passphrase: String::new(),
            extra,
        })
    }

    /// Number of words currently entered
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonics.split_whitespace().count()
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("mnemonics", &format_args!("<{} words>", self.word_count()))
            .field(
                "passphrase",
                &if self.passphrase.is_empty() {
                    "<empty>"
                } else {
                    "<redacted>"
                },
            )
            .field("extra", &self.extra)
            .finish()
    }
}

/// Changed values reported by the form on each edit
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct FormPatch {
    pub mnemonics: Option<String>,
    pub passphrase: Option<String>,
    #[zeroize(skip)]
    pub extra: BTreeMap<String, Value>,
}

impl FormPatch {
    /// Edit of the seed words only
    #[must_use]
    pub fn mnemonics(value: impl Into<String>) -> Self {
        Self {
            mnemonics: Some(value.into()),
            passphrase: None,
            extra: BTreeMap::new(),
        }
    }

    /// Edit of the passphrase only
    #[must_use]
    pub fn passphrase(value: impl Into<String>) -> Self {
        Self {
            mnemonics: None,
            passphrase: Some(value.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Edit of a non-secret widget field
    #[must_use]
    pub fn field(name: impl Into<String>, value: Value) -> Self {
        let mut extra = BTreeMap::new();
        extra.insert(name.into(), value);
        Self {
            mnemonics: None,
            passphrase: None,
            extra,
        }
    }
}
