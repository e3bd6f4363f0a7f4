use failure::{Context, Error as FailureError};
use hyper::StatusCode;
use serde_json;
use validator::ValidationErrors;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Parse error")]
    Parse,
    #[fail(display = "Validation error")]
    Validate(ValidationErrors),
    #[fail(display = "R2D2 connection error")]
    Connection,
}

impl Error {
    pub fn code(&self) -> StatusCode {
        match *self {
            Error::NotFound => StatusCode::NotFound,
            Error::Validate(_) => StatusCode::BadRequest,
            Error::Parse => StatusCode::UnprocessableEntity,
            Error::Connection => StatusCode::InternalServerError,
        }
    }

    pub fn payload(&self) -> Option<serde_json::Value> {
        match *self {
            Error::Validate(ref errors) => serde_json::to_value(errors).ok(),
            _ => None,
        }
    }
}

/// Error body of failed http responses
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    pub code: u16,
    pub description: String,
    pub payload: Option<serde_json::Value>,
}

/// Looks through the cause chain for the first typed `Error`,
/// either raised directly or attached as a context.
pub fn find_error(err: &FailureError) -> Option<&Error> {
    err.iter_chain()
        .filter_map(|cause| {
            cause
                .downcast_ref::<Error>()
                .or_else(|| cause.downcast_ref::<Context<Error>>().map(|context| context.get_context()))
        }).next()
}

pub fn status_code(err: &FailureError) -> StatusCode {
    find_error(err).map(Error::code).unwrap_or(StatusCode::InternalServerError)
}

/// Errors without a typed cause are reported as internal without details
pub fn error_message(err: &FailureError) -> ErrorMessage {
    match find_error(err) {
        Some(e) => ErrorMessage {
            code: e.code().as_u16(),
            description: e.to_string(),
            payload: e.payload(),
        },
        None => ErrorMessage {
            code: StatusCode::InternalServerError.as_u16(),
            description: "Internal server error".to_string(),
            payload: None,
        },
    }
}
