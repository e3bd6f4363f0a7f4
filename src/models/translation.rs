//! Module containing structs to work with languages and translations.
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json;
use validator::ValidationError;

/// Rendered instead of a translation missing both in the requested and the default language
pub const FIELD_NOT_FOUND: &str = "Field not found";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ch,
    De,
    Ru,
    Es,
    Fr,
    Ko,
    Po,
    Ja,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lang = match *self {
            Language::En => "en",
            Language::Ch => "ch",
            Language::De => "de",
            Language::Ru => "ru",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ko => "ko",
            Language::Po => "po",
            Language::Ja => "ja",
        };
        write!(f, "{}", lang)
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "en" => Language::En,
            "ch" => Language::Ch,
            "de" => Language::De,
            "ru" => Language::Ru,
            "es" => Language::Es,
            "fr" => Language::Fr,
            "ko" => Language::Ko,
            "po" => Language::Po,
            "ja" => Language::Ja,
            _ => {
                return Err(ValidationError {
                    code: Cow::from("language"),
                    message: Some(Cow::from("Invalid language format. Language name must be ISO 639-1 format.")),
                    params: HashMap::new(),
                })
            }
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Translation {
    pub lang: Language,
    pub text: String,
}

impl Translation {
    pub fn new(lang: Language, text: String) -> Self {
        Self { lang, text }
    }
}

/// Picks the text for `lang` out of a stored translation list,
/// falling back to `default_lang` and then to `FIELD_NOT_FOUND`.
/// Malformed entries are skipped.
pub fn get_translation(texts: &serde_json::Value, lang: Language, default_lang: Language) -> String {
    let translations = texts
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<Translation>(item.clone()).ok())
                .collect::<Vec<Translation>>()
        }).unwrap_or_default();

    translations
        .iter()
        .find(|t| t.lang == lang)
        .or_else(|| translations.iter().find(|t| t.lang == default_lang))
        .map(|t| t.text.clone())
        .unwrap_or_else(|| FIELD_NOT_FOUND.to_string())
}
