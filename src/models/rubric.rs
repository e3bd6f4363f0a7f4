//! Rubrics form the catalogue tree
use std::time::SystemTime;

use serde_json;

use models::{get_translation, Gender, Language};

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct Rubric {
    pub id: i32,
    pub name: serde_json::Value,
    pub slug: String,
    pub level: i32,
    pub parent_id: Option<i32>,
    pub catalogue_title: serde_json::Value,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl Rubric {
    /// Parsed title template, an empty one when the stored json is malformed
    pub fn catalogue_title_template(&self) -> CatalogueTitleTemplate {
        serde_json::from_value(self.catalogue_title.clone()).unwrap_or_else(|e| {
            warn!("Rubric {} has malformed catalogue title template: {}", self.id, e);
            CatalogueTitleTemplate::default()
        })
    }

    pub fn output(&self, lang: Language, default_lang: Language) -> RubricOutput {
        RubricOutput {
            id: self.id,
            name: get_translation(&self.name, lang, default_lang),
            slug: self.slug.clone(),
            level: self.level,
            parent_id: self.parent_id,
        }
    }
}

/// Rubric tree edge
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricNode {
    pub id: i32,
    pub parent_id: Option<i32>,
}

/// Per rubric template the catalogue title is assembled from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueTitleTemplate {
    #[serde(default)]
    pub default_title: serde_json::Value,
    #[serde(default)]
    pub prefix: Option<serde_json::Value>,
    #[serde(default)]
    pub keyword: serde_json::Value,
    #[serde(default)]
    pub gender: Gender,
}

impl Default for CatalogueTitleTemplate {
    fn default() -> Self {
        Self {
            default_title: json!([]),
            prefix: None,
            keyword: json!([]),
            gender: Gender::default(),
        }
    }
}

/// Rubric the way it is shown to clients
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RubricOutput {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub level: i32,
    pub parent_id: Option<i32>,
}

/// Ids of a rubric and everything below it
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RubricSubtree {
    pub rubric_id: i32,
    pub ids: Vec<i32>,
}
