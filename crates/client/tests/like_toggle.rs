//! Like-toggle view-state property: a like/unlike pair is a no-op.

use fontory_models::Font;
use serde_json::json;

fn font_from_list_response() -> Font {
    let body = json!([{"fontId": 1, "name": "폰토리체", "likeCount": 5, "liked": false}]);
    let mut fonts: Vec<Font> = serde_json::from_value(body).unwrap();
    fonts.remove(0)
}

#[test]
fn test_like_then_unlike_restores_original_count() {
    let mut font = font_from_list_response();
    assert_eq!((font.like_count, font.liked), (5, false));

    font.toggle_like();
    assert_eq!((font.like_count, font.liked), (6, true));

    font.toggle_like();
    assert_eq!((font.like_count, font.liked), (5, false));
}

#[test]
fn test_server_liked_field_is_the_load_time_source_of_truth() {
    let body = json!({"fontId": 2, "fontName": "하나체", "likeCount": 10, "liked": true});
    let mut font: Font = serde_json::from_value(body).unwrap();

    // Already liked on load: the first toggle is an unlike.
    font.toggle_like();
    assert_eq!((font.like_count, font.liked), (9, false));
}

#[test]
fn test_many_pairs_stay_idempotent() {
    let mut font = font_from_list_response();
    for _ in 0..100 {
        font.toggle_like();
        font.toggle_like();
    }
    assert_eq!((font.like_count, font.liked), (5, false));
}
