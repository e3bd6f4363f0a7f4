//! Catalogue title composition.
//!
//! The title is assembled as `prefix begin before keyword after end`.
//! Attribute values agree in gender with the keyword: the first
//! replace-keyword attribute fixes the gender, everything is rendered with it.
use models::{get_translation, Attribute, AttributeOption, CatalogueTitleTemplate, Gender, Language, TitlePosition, FIELD_NOT_FOUND};

/// Selected value of a filtering attribute
#[derive(Debug, Clone, PartialEq)]
pub enum TitleValue<'a> {
    /// Option of a select attribute
    Option(&'a AttributeOption),
    /// Literal value of string and number attributes
    Text(String),
    /// Option slug that no longer resolves
    Missing,
}

impl<'a> TitleValue<'a> {
    fn gender(&self) -> Option<Gender> {
        match *self {
            TitleValue::Option(option) => option.gender,
            _ => None,
        }
    }

    fn render(&self, gender: Gender, lang: Language, default_lang: Language) -> String {
        match *self {
            TitleValue::Option(option) => option.text_for_gender(gender, lang, default_lang),
            TitleValue::Text(ref text) => text.clone(),
            TitleValue::Missing => FIELD_NOT_FOUND.to_string(),
        }
    }
}

/// Filtering attribute together with its selected values
#[derive(Debug, Clone, PartialEq)]
pub struct TitleAttribute<'a> {
    pub attribute: &'a Attribute,
    pub values: Vec<TitleValue<'a>>,
}

impl<'a> TitleAttribute<'a> {
    fn gender(&self) -> Option<Gender> {
        self.values.iter().filter_map(|value| value.gender()).next()
    }

    fn render(&self, gender: Gender, lang: Language, default_lang: Language) -> String {
        let separator = title_separator(lang, default_lang);
        self.values
            .iter()
            .map(|value| value.render(gender, lang, default_lang))
            .filter(|text| !text.is_empty())
            .collect::<Vec<String>>()
            .join(separator)
    }
}

/// Joins several values of one attribute
pub fn title_separator(lang: Language, default_lang: Language) -> &'static str {
    if lang == default_lang {
        ", "
    } else {
        " and "
    }
}

#[derive(Default)]
struct TitleParts {
    begin: Vec<String>,
    before_keyword: Vec<String>,
    replace_keyword: Vec<String>,
    after_keyword: Vec<String>,
    end: Vec<String>,
}

/// Composes the catalogue title, falling back to the default title when no attribute filters
pub fn generate_catalogue_title(
    template: &CatalogueTitleTemplate,
    attributes: &[TitleAttribute],
    lang: Language,
    default_lang: Language,
) -> String {
    let attributes: Vec<&TitleAttribute> = attributes.iter().filter(|attribute| !attribute.values.is_empty()).collect();
    if attributes.is_empty() {
        return get_translation(&template.default_title, lang, default_lang);
    }

    let positioned: Vec<(TitlePosition, &TitleAttribute)> = attributes
        .into_iter()
        .map(|attribute| (attribute.attribute.position_in_title(lang, default_lang), attribute))
        .collect();

    let gender = positioned
        .iter()
        .find(|(position, _)| *position == TitlePosition::ReplaceKeyword)
        .and_then(|(_, attribute)| attribute.gender())
        .unwrap_or(template.gender);

    let mut parts = TitleParts::default();
    for (position, attribute) in positioned {
        let text = attribute.render(gender, lang, default_lang);
        if text.is_empty() {
            continue;
        }
        match position {
            TitlePosition::Begin => parts.begin.push(text),
            TitlePosition::BeforeKeyword => parts.before_keyword.push(text),
            TitlePosition::ReplaceKeyword => parts.replace_keyword.push(text),
            TitlePosition::AfterKeyword => parts.after_keyword.push(text),
            TitlePosition::End => parts.end.push(text),
        }
    }

    let keyword = if parts.replace_keyword.is_empty() {
        get_translation(&template.keyword, lang, default_lang)
    } else {
        parts.replace_keyword.join(title_separator(lang, default_lang))
    };
    let prefix = template
        .prefix
        .as_ref()
        .map(|prefix| get_translation(prefix, lang, default_lang))
        .unwrap_or_default();

    let mut words = vec![prefix];
    words.extend(parts.begin);
    words.extend(parts.before_keyword);
    words.push(keyword);
    words.extend(parts.after_keyword);
    words.extend(parts.end);

    let title = words
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
        .to_lowercase();

    capitalize(&title)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
