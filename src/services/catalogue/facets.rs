//! Attribute facets offered by the catalogue filter
use std::collections::HashMap;

use models::{
    get_translation, Attribute, AttributeOption, CatalogueFilterAttribute, CatalogueFilterOption, CatalogueFilterParam, Language,
    DEFAULT_PRIORITY,
};

/// View counters ranking facets, keyed by entity id
#[derive(Debug, Clone, Default)]
pub struct FacetPriorities {
    pub attributes: HashMap<i32, i32>,
    /// Option counters per attribute id
    pub options: HashMap<i32, HashMap<i32, i32>>,
}

/// Selectable attributes with their options, most viewed first
pub fn catalogue_filter_attributes(
    attributes: &[Attribute],
    options: &[AttributeOption],
    selected: &[CatalogueFilterParam],
    priorities: &FacetPriorities,
    lang: Language,
    default_lang: Language,
) -> Vec<CatalogueFilterAttribute> {
    let mut attributes: Vec<&Attribute> = attributes
        .iter()
        .filter(|attribute| attribute.variant.is_selectable() && attribute.options_group_id.is_some())
        .collect();
    attributes.sort_by_key(|attribute| (-priority(&priorities.attributes, attribute.id), attribute.id));

    attributes
        .into_iter()
        .map(|attribute| {
            let selected_values = selected
                .iter()
                .find(|param| param.key == attribute.slug)
                .map(|param| param.values.as_slice())
                .unwrap_or(&[]);
            let empty = HashMap::new();
            let option_priorities = priorities.options.get(&attribute.id).unwrap_or(&empty);

            let mut attribute_options: Vec<&AttributeOption> = options
                .iter()
                .filter(|option| Some(option.options_group_id) == attribute.options_group_id)
                .collect();
            attribute_options.sort_by_key(|option| (-priority(option_priorities, option.id), option.id));

            CatalogueFilterAttribute {
                id: attribute.id,
                name: get_translation(&attribute.name, lang, default_lang),
                slug: attribute.slug.clone(),
                options: attribute_options
                    .into_iter()
                    .map(|option| CatalogueFilterOption {
                        id: option.id,
                        name: get_translation(&option.name, lang, default_lang),
                        slug: option.slug.clone(),
                        is_selected: selected_values.contains(&option.slug),
                    }).collect(),
            }
        }).collect()
}

fn priority(counters: &HashMap<i32, i32>, id: i32) -> i32 {
    counters.get(&id).cloned().unwrap_or(DEFAULT_PRIORITY)
}
