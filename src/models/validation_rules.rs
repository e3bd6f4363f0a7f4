use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;
use validator::ValidationError;

/// Longest filter accepted, rubric slug included
pub const MAX_FILTER_SEGMENTS: usize = 50;

/// Filter segments are slugs joined with `-`, prices may carry a decimal point
pub fn validate_catalogue_filter(filter: &[String]) -> Result<(), ValidationError> {
    lazy_static! {
        static ref FILTER_SEGMENT_RE: Regex = Regex::new(r"^[\w.\-]*$").unwrap();
    }

    if filter.len() > MAX_FILTER_SEGMENTS {
        return Err(ValidationError {
            code: Cow::from("filter"),
            message: Some(Cow::from("Too many filter segments")),
            params: HashMap::new(),
        });
    }

    match filter.iter().find(|segment| !FILTER_SEGMENT_RE.is_match(segment)) {
        None => Ok(()),
        Some(segment) => {
            let mut params = HashMap::new();
            params.insert(Cow::from("segment"), json!(segment));
            Err(ValidationError {
                code: Cow::from("filter"),
                message: Some(Cow::from("Filter segment may contain only letters, digits, '-', '_' and '.'")),
                params,
            })
        }
    }
}
