//! Path and body validation shared by inbound HTTP adapters.

use std::str::FromStr;

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, MessageKey, Messages};

const INVALID_UUID: &str = "invalid_uuid";

/// Parse a record id taken from the URL path.
///
/// A malformed id is a client error carrying `{field, value, code:
/// "invalid_uuid"}` rather than a 404.
pub(crate) fn parse_path_id<T>(messages: Messages, field: &str, raw: &str) -> Result<T, Error>
where
    T: FromStr,
{
    raw.parse::<T>().map_err(|_| {
        Error::invalid_request(messages.text(MessageKey::InvalidId)).with_details(json!({
            "field": field,
            "value": raw,
            "code": INVALID_UUID,
        }))
    })
}

/// Error handler for `web::JsonConfig` so undecodable bodies use the shared
/// error envelope.
pub(crate) fn json_error_handler(
    messages: Messages,
) -> impl Fn(JsonPayloadError, &HttpRequest) -> actix_web::Error + Send + Sync + 'static {
    move |err, req| {
        debug!(path = %req.path(), error = %err, "rejecting malformed JSON body");
        Error::invalid_request(messages.text(MessageKey::MalformedBody))
            .with_details(json!({ "code": "malformed_body", "reason": err.to_string() }))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingId, ErrorCode};
    use rstest::rstest;

    #[rstest]
    fn parses_well_formed_ids() {
        let id: BookingId = parse_path_id(
            Messages::default(),
            "id",
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        )
        .expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case("42")]
    #[case("not-a-uuid")]
    fn malformed_ids_are_invalid_requests(#[case] raw: &str) {
        let err = parse_path_id::<BookingId>(Messages::default(), "id", raw)
            .expect_err("malformed id");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["code"], INVALID_UUID);
        assert_eq!(details["value"], raw);
    }
}
