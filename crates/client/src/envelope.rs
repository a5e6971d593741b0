//! Response-envelope normalization.
//!
//! The backend is not consistent about response shapes. Observed in the wild:
//!
//! - `{status, data, message}` envelopes, where `status` of `0` *or* `200`
//!   both signal success and the payload sits under `data`
//!   (e.g. `GET /api/mypage/fonts/my`);
//! - bare arrays (`GET /fonts`, `GET /backgrounds`);
//! - bare objects (`POST /practice-sheets`, `POST /fonts/create`);
//! - plain text on some error paths.
//!
//! Everything funnels through [`decode`] so call sites branch on
//! [`ClientError`] variants, never on raw payload shapes.

use fontory_common::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope `status` values that signal success.
const fn is_success_status(status: i64) -> bool {
    status == 0 || status == 200
}

/// Decode a 2xx response body into `T`, unwrapping a `{status, data, message}`
/// envelope when one is present.
///
/// An empty body decodes as JSON `null`, which satisfies `T = ()` and any
/// fully-optional type. A non-success envelope becomes
/// [`ClientError::Service`]; an unparseable body becomes
/// [`ClientError::Decode`].
pub fn decode<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return serde_json::from_value(Value::Null)
            .map_err(|_| ClientError::Decode("empty response body".to_string()));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| ClientError::Decode(format!("invalid JSON: {e}")))?;

    let payload = unwrap_envelope(value)?;
    serde_json::from_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Strip the `{status, data, message}` envelope when the value carries one,
/// otherwise pass the value through untouched.
fn unwrap_envelope(value: Value) -> ClientResult<Value> {
    let Some(object) = value.as_object() else {
        return Ok(value);
    };

    // Only a numeric `status` alongside `data` or `message` counts as an
    // envelope; a bare entity with its own `status` field passes through.
    let Some(status) = object.get("status").and_then(Value::as_i64) else {
        return Ok(value);
    };
    if !object.contains_key("data") && !object.contains_key("message") {
        return Ok(value);
    }

    if is_success_status(status) {
        Ok(object.get("data").cloned().unwrap_or(Value::Null))
    } else {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request rejected by server")
            .to_string();
        Err(ClientError::Service { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_envelope_status_200_unwraps_data() {
        let body = json!({"status": 200, "data": [{"id": 1}], "message": "ok"}).to_string();
        let items: Vec<Item> = decode(&body).unwrap();
        assert_eq!(items, vec![Item { id: 1 }]);
    }

    #[test]
    fn test_envelope_status_0_unwraps_data() {
        let body = json!({"status": 0, "data": {"id": 7}}).to_string();
        let item: Item = decode(&body).unwrap();
        assert_eq!(item.id, 7);
    }

    #[test]
    fn test_envelope_failure_becomes_service_error() {
        let body = json!({"status": 500, "message": "폰트 불러오기 실패"}).to_string();
        let err = decode::<Vec<Item>>(&body).unwrap_err();
        match err {
            ClientError::Service { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "폰트 불러오기 실패");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_failure_without_message() {
        let body = json!({"status": 400, "data": null}).to_string();
        let err = decode::<Item>(&body).unwrap_err();
        assert_eq!(err.kind(), "service-error");
    }

    #[test]
    fn test_bare_array_passes_through() {
        let body = json!([{"id": 1}, {"id": 2}]).to_string();
        let items: Vec<Item> = decode(&body).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_bare_object_passes_through() {
        let body = json!({"id": 42}).to_string();
        let item: Item = decode(&body).unwrap();
        assert_eq!(item.id, 42);
    }

    #[test]
    fn test_object_with_non_numeric_status_is_not_an_envelope() {
        #[derive(serde::Deserialize)]
        struct Job {
            status: String,
        }
        let body = json!({"status": "PENDING"}).to_string();
        let job: Job = decode(&body).unwrap();
        assert_eq!(job.status, "PENDING");
    }

    #[test]
    fn test_numeric_status_without_envelope_keys_passes_through() {
        #[derive(serde::Deserialize)]
        struct Job {
            status: i64,
            id: i64,
        }
        let body = json!({"status": 3, "id": 9}).to_string();
        let job: Job = decode(&body).unwrap();
        assert_eq!(job.status, 3);
        assert_eq!(job.id, 9);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = decode::<Item>("이미지 업로드 실패").unwrap_err();
        assert_eq!(err.kind(), "decode-error");
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        decode::<()>("").unwrap();
        decode::<()>("   ").unwrap();
    }

    #[test]
    fn test_empty_body_for_typed_payload_is_decode_error() {
        let err = decode::<Item>("").unwrap_err();
        assert_eq!(err.kind(), "decode-error");
    }

    #[test]
    fn test_envelope_success_with_null_data_decodes_as_unit() {
        let body = json!({"status": 200, "message": "ok"}).to_string();
        decode::<()>(&body).unwrap();
    }
}
