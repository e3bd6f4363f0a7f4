//! Parser of catalogue filter segments.
//!
//! The first element is the rubric slug, the rest are `<key>-<value>`
//! segments split at the first `-`. Reserved keys steer sorting and
//! price bounds, all other keys filter by attribute slug.
use models::{CatalogueControlParams, CatalogueFilterParam, ParsedCatalogueFilter};

pub const SORT_BY_KEY: &str = "sortBy";
pub const SORT_DIR_KEY: &str = "sortDir";
pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";

/// `None` when there is no rubric slug to resolve
pub fn parse_catalogue_filter(filter: &[String]) -> Option<ParsedCatalogueFilter> {
    let (rubric_slug, segments) = filter.split_first()?;
    if rubric_slug.is_empty() {
        return None;
    }

    let mut params: Vec<CatalogueFilterParam> = vec![];
    let mut control = CatalogueControlParams::default();

    for segment in segments {
        let (key, value) = split_segment(segment);
        match key {
            SORT_BY_KEY => control.sort_by = value.and_then(|v| parse_control(key, v)),
            SORT_DIR_KEY => control.sort_dir = value.and_then(|v| parse_control(key, v)),
            MIN_PRICE_KEY => control.min_price = value.and_then(|v| parse_price(key, v)),
            MAX_PRICE_KEY => control.max_price = value.and_then(|v| parse_price(key, v)),
            _ => {
                let value = value.filter(|v| !v.is_empty()).map(|v| v.to_string());
                match params.iter_mut().find(|param| param.key == key) {
                    Some(param) => param.values.extend(value),
                    None => params.push(CatalogueFilterParam {
                        key: key.to_string(),
                        values: value.into_iter().collect(),
                    }),
                }
            }
        }
    }

    Some(ParsedCatalogueFilter {
        rubric_slug: rubric_slug.clone(),
        params,
        control,
    })
}

fn split_segment(segment: &str) -> (&str, Option<&str>) {
    match segment.find('-') {
        Some(index) => (&segment[..index], Some(&segment[index + 1..])),
        None => (segment, None),
    }
}

fn parse_price(key: &str, value: &str) -> Option<f64> {
    parse_control::<f64>(key, value).and_then(|price| {
        if price.is_finite() {
            Some(price)
        } else {
            warn!("Ignoring catalogue price segment {} with non finite value {}.", key, value);
            None
        }
    })
}

fn parse_control<T: ::std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse::<T>().ok();
    if parsed.is_none() {
        warn!("Ignoring catalogue control segment {} with invalid value {}.", key, value);
    }
    parsed
}
