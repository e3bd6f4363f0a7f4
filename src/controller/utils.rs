use std::str;

use futures::{Future, Stream};
use hyper;
use hyper::Headers;
use serde::de::DeserializeOwned;
use serde_json;

use errors::Error;
use failure::{Error as FailureError, Fail};

/// Reads request body and deserializes it from json
pub fn parse_body<T>(body: hyper::Body) -> Box<Future<Item = T, Error = FailureError>>
where
    T: DeserializeOwned + 'static,
{
    Box::new(
        body.concat2()
            .map_err(|e| FailureError::from(e.context("Reading request body failed").context(Error::Parse)))
            .and_then(|chunk| {
                serde_json::from_slice::<T>(&chunk).map_err(|e| {
                    FailureError::from(
                        e.context(format!("Parsing body failed: {}", String::from_utf8_lossy(&chunk)))
                            .context(Error::Parse),
                    )
                })
            }),
    )
}

/// Raw header value as utf-8 text
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .get_raw(name)
        .and_then(|raw| raw.one())
        .and_then(|bytes| str::from_utf8(bytes).ok())
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let mut headers = Headers::new();
        headers.set_raw("X-City", "spb ");
        headers.set_raw("X-Language", "");
        assert_eq!(header_value(&headers, "X-City"), Some("spb"));
        assert_eq!(header_value(&headers, "x-city"), Some("spb"));
        assert_eq!(header_value(&headers, "X-Language"), None);
        assert_eq!(header_value(&headers, "Authorization"), None);
    }
}
