//! Attributes describe products and drive catalogue filters
use std::fmt;
use std::str::FromStr;

use diesel::sql_types::VarChar;
use serde_json;

use models::Language;

/// How an attribute is rendered and filtered
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[sql_type = "VarChar"]
#[serde(rename_all = "camelCase")]
pub enum AttributeVariant {
    Select,
    MultipleSelect,
    String,
    Number,
}

impl AttributeVariant {
    /// Variants offering a fixed list of options to pick from
    pub fn is_selectable(&self) -> bool {
        match *self {
            AttributeVariant::Select | AttributeVariant::MultipleSelect => true,
            _ => false,
        }
    }
}

impl fmt::Display for AttributeVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variant = match *self {
            AttributeVariant::Select => "select",
            AttributeVariant::MultipleSelect => "multipleSelect",
            AttributeVariant::String => "string",
            AttributeVariant::Number => "number",
        };
        write!(f, "{}", variant)
    }
}

impl FromStr for AttributeVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(AttributeVariant::Select),
            "multipleSelect" => Ok(AttributeVariant::MultipleSelect),
            "string" => Ok(AttributeVariant::String),
            "number" => Ok(AttributeVariant::Number),
            _ => Err(()),
        }
    }
}

varchar_enum_sql!(AttributeVariant);

/// Placement of an attribute's values inside a catalogue title
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TitlePosition {
    Begin,
    BeforeKeyword,
    AfterKeyword,
    End,
    ReplaceKeyword,
}

impl Default for TitlePosition {
    fn default() -> Self {
        TitlePosition::BeforeKeyword
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PositionInTitle {
    pub lang: Language,
    pub position: TitlePosition,
}

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct Attribute {
    pub id: i32,
    pub attributes_group_id: i32,
    pub name: serde_json::Value,
    pub slug: String,
    pub variant: AttributeVariant,
    pub options_group_id: Option<i32>,
    pub metric: Option<serde_json::Value>,
    pub positioning_in_title: Option<serde_json::Value>,
}

impl Attribute {
    /// Title position for `lang`, then for `default_lang`, otherwise before the keyword
    pub fn position_in_title(&self, lang: Language, default_lang: Language) -> TitlePosition {
        let positions = self
            .positioning_in_title
            .as_ref()
            .and_then(|value| value.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value::<PositionInTitle>(item.clone()).ok())
                    .collect::<Vec<PositionInTitle>>()
            }).unwrap_or_default();

        positions
            .iter()
            .find(|p| p.lang == lang)
            .or_else(|| positions.iter().find(|p| p.lang == default_lang))
            .map(|p| p.position)
            .unwrap_or_default()
    }
}
