use serde_json::json;

use super::*;

fn ids(listing: &ImageListing) -> Vec<&str> {
    listing.images.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================
// parse_image_listing
// =============================================================

#[test]
fn listing_reads_nested_result_images_in_order() {
    let body = json!({
        "result": { "images": [
            { "id": "b", "variants": ["b0"] },
            { "id": "a", "variants": ["a0", "a1"] },
        ]}
    });
    let listing = parse_image_listing(&body);
    assert_eq!(listing.shape, Some(ListShape::Nested));
    assert_eq!(ids(&listing), vec!["b", "a"]);
    assert_eq!(listing.skipped, 0);
}

#[test]
fn listing_reads_top_level_images() {
    let body = json!({ "images": [{ "id": "x", "variants": ["u"] }] });
    let listing = parse_image_listing(&body);
    assert_eq!(listing.shape, Some(ListShape::TopLevel));
    assert_eq!(ids(&listing), vec!["x"]);
}

#[test]
fn listing_prefers_nested_over_top_level() {
    let body = json!({
        "result": { "images": [{ "id": "nested", "variants": ["n"] }] },
        "images": [{ "id": "top", "variants": ["t"] }],
    });
    assert_eq!(ids(&parse_image_listing(&body)), vec!["nested"]);
}

#[test]
fn listing_falls_through_when_nested_is_not_an_array() {
    let body = json!({
        "result": { "images": "nope" },
        "images": [{ "id": "top", "variants": ["t"] }],
    });
    let listing = parse_image_listing(&body);
    assert_eq!(listing.shape, Some(ListShape::TopLevel));
    assert_eq!(ids(&listing), vec!["top"]);
}

#[test]
fn listing_of_unknown_shape_is_empty() {
    for body in [json!({}), json!([]), json!(null), json!({ "images": { "id": "x" } })] {
        let listing = parse_image_listing(&body);
        assert!(listing.images.is_empty(), "{body}");
        assert_eq!(listing.shape, None);
    }
}

#[test]
fn listing_skips_invalid_entries() {
    let body = json!({ "images": [
        { "id": "ok", "variants": ["u"] },
        { "id": "no-variants", "variants": [] },
        { "variants": ["missing-id"] },
        "garbage",
    ]});
    let listing = parse_image_listing(&body);
    assert_eq!(ids(&listing), vec!["ok"]);
    assert_eq!(listing.skipped, 3);
}

#[test]
fn listing_accepts_numeric_ids() {
    let body = json!({ "images": [{ "id": 42, "variants": ["u"] }] });
    assert_eq!(ids(&parse_image_listing(&body)), vec!["42"]);
}

// =============================================================
// parse_uploaded_record
// =============================================================

#[test]
fn uploaded_record_reads_result() {
    let body = json!({ "result": { "id": "x", "variants": ["u1", "u2"] } });
    let record = parse_uploaded_record(&body).unwrap();
    assert_eq!(record.id, "x");
    assert_eq!(record.variants, vec!["u1", "u2"]);
    assert_eq!(record.thumbnail(), Some("u1"));
}

#[test]
fn uploaded_record_missing_result_is_none() {
    assert!(parse_uploaded_record(&json!({ "success": true })).is_none());
    assert!(parse_uploaded_record(&json!({ "result": null })).is_none());
    assert!(parse_uploaded_record(&json!({ "result": { "id": "x", "variants": [] } })).is_none());
}
