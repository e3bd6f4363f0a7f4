//! Options are the selectable values of select-like attributes
use std::fmt;
use std::str::FromStr;

use diesel::sql_types::VarChar;
use serde_json;

use models::{get_translation, Language};

/// Grammatical gender used to agree adjectives with the catalogue keyword
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
#[sql_type = "VarChar"]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Feminine,
    Masculine,
    Neuter,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Masculine
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let gender = match *self {
            Gender::Feminine => "feminine",
            Gender::Masculine => "masculine",
            Gender::Neuter => "neuter",
        };
        write!(f, "{}", gender)
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feminine" => Ok(Gender::Feminine),
            "masculine" => Ok(Gender::Masculine),
            "neuter" => Ok(Gender::Neuter),
            _ => Err(()),
        }
    }
}

varchar_enum_sql!(Gender);

/// Alternate spelling of an option agreeing with `gender`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenderVariant {
    pub gender: Gender,
    pub value: serde_json::Value,
}

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct AttributeOption {
    pub id: i32,
    pub options_group_id: i32,
    pub name: serde_json::Value,
    pub slug: String,
    pub gender: Option<Gender>,
    pub variants: Option<serde_json::Value>,
}

impl AttributeOption {
    /// Stored gender variants, malformed entries are skipped
    pub fn gender_variants(&self) -> Vec<GenderVariant> {
        self.variants
            .as_ref()
            .and_then(|variants| variants.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value::<GenderVariant>(item.clone()).ok())
                    .collect()
            }).unwrap_or_default()
    }

    /// Option text agreeing with `gender`, the plain name when no variant exists for it
    pub fn text_for_gender(&self, gender: Gender, lang: Language, default_lang: Language) -> String {
        match self.gender_variants().into_iter().find(|variant| variant.gender == gender) {
            Some(variant) => get_translation(&variant.value, lang, default_lang),
            None => get_translation(&self.name, lang, default_lang),
        }
    }
}
