//! Normalization matrix: every observed backend response shape must fold
//! into the same `Result` without call sites branching on raw payloads.

use fontory_client::envelope;
use fontory_common::ClientError;
use fontory_models::{Background, Font, PracticeSheet, Quote};
use serde_json::json;

#[test]
fn test_font_list_is_a_bare_array() {
    let body = json!([
        {
            "fontId": 1,
            "name": "폰토리체",
            "userId": "hana",
            "likeCount": 5,
            "downloadCount": 3,
            "liked": false
        }
    ])
    .to_string();

    let fonts: Vec<Font> = envelope::decode(&body).unwrap();
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].font_name, "폰토리체");
}

#[test]
fn test_my_fonts_envelope_unwraps_to_the_same_type() {
    // Same entity as /fonts but wrapped in {status, data, message}.
    let body = json!({
        "status": 200,
        "message": "ok",
        "data": [
            {"fontId": 2, "fontName": "하나체", "likeCount": 0, "downloadCount": 0}
        ]
    })
    .to_string();

    let fonts: Vec<Font> = envelope::decode(&body).unwrap();
    assert_eq!(fonts[0].font_id, 2);
}

#[test]
fn test_envelope_rejection_is_a_service_error_not_a_decode_error() {
    let body = json!({"status": 401, "message": "로그인이 필요합니다"}).to_string();
    let err = envelope::decode::<Vec<Font>>(&body).unwrap_err();
    assert_eq!(err.kind(), "service-error");
    match err {
        ClientError::Service { status, .. } => assert_eq!(status, 401),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_backgrounds_bare_array() {
    let body = json!([
        {"backgroundId": 1, "imageUrl": "/backgrounds/1.png"},
        {"backgroundId": 2, "imageUrl": "/backgrounds/2.png"}
    ])
    .to_string();

    let backgrounds: Vec<Background> = envelope::decode(&body).unwrap();
    assert_eq!(backgrounds[1].background_id, 2);
}

#[test]
fn test_practice_sheet_bare_object() {
    let body = json!({"sheetId": 9, "imageUrl": "/sheets/9.png"}).to_string();
    let sheet: PracticeSheet = envelope::decode(&body).unwrap();
    assert_eq!(sheet.sheet_id, Some(9));
    assert_eq!(sheet.image_url, "/sheets/9.png");
}

#[test]
fn test_quote_envelope_with_status_zero() {
    let body = json!({
        "status": 0,
        "data": {"content": "오늘도 한 글자", "author": "작자 미상"}
    })
    .to_string();

    let quote: Quote = envelope::decode(&body).unwrap();
    assert_eq!(quote.author.as_deref(), Some("작자 미상"));
}

#[test]
fn test_plain_text_error_body_is_a_decode_error() {
    let err = envelope::decode::<Quote>("서버 오류가 발생했습니다").unwrap_err();
    assert_eq!(err.kind(), "decode-error");
}
