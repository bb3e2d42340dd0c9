use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_empty_yields_defaults() {
    let cfg = GalleryConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, GalleryConfig::default());
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.max_upload_bytes, 5_242_880);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = GalleryConfig::from_lookup(lookup_from(&[
        ("GALLERY_API_BASE", "https://api.example.test/"),
        ("GALLERY_API_ROUTES", "imagenes"),
        ("GALLERY_ENLARGE_VARIANT", "1"),
        ("GALLERY_MALFORMED_UPLOAD", "Refetch"),
        ("GALLERY_AFTER_UPLOAD", "refetch"),
        ("GALLERY_LOCALE", "es"),
    ]))
    .unwrap();

    assert_eq!(cfg.api_base, "https://api.example.test");
    assert_eq!(cfg.routes, ApiRoutes::Imagenes);
    assert_eq!(cfg.enlarge_variant, EnlargeVariant::Index(1));
    assert_eq!(cfg.malformed_upload, MalformedUploadPolicy::Refetch);
    assert_eq!(cfg.after_upload, UploadMerge::Refetch);
    assert_eq!(cfg.locale, Locale::Es);
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = GalleryConfig::from_lookup(lookup_from(&[("GALLERY_API_BASE", "  "), ("GALLERY_LOCALE", "")])).unwrap();
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.locale, Locale::En);
}

#[test]
fn from_lookup_unknown_policy_errors() {
    let err = GalleryConfig::from_lookup(lookup_from(&[("GALLERY_MALFORMED_UPLOAD", "explode")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("GALLERY_MALFORMED_UPLOAD"));
    assert!(err.contains("explode"));
}

#[test]
fn from_lookup_unknown_enlarge_variant_errors() {
    let err = GalleryConfig::from_lookup(lookup_from(&[("GALLERY_ENLARGE_VARIANT", "biggest")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "GALLERY_ENLARGE_VARIANT", .. }));
}

#[test]
fn urls_join_base_and_route_paths() {
    let cfg = GalleryConfig::default();
    assert_eq!(cfg.list_url(), "http://localhost:3001/images");
    assert_eq!(cfg.upload_url(), "http://localhost:3001/images/upload");

    let hosted = GalleryConfig {
        api_base: "https://img.example.test/api".to_owned(),
        routes: ApiRoutes::Imagenes,
        ..GalleryConfig::default()
    };
    assert_eq!(hosted.list_url(), "https://img.example.test/api/imagenes/all");
    assert_eq!(hosted.upload_url(), "https://img.example.test/api/imagenes/upload");
}

#[test]
fn enlarge_variant_pick_by_position() {
    let variants = vec!["low".to_owned(), "mid".to_owned(), "high".to_owned()];
    assert_eq!(EnlargeVariant::First.pick(&variants), Some("low"));
    assert_eq!(EnlargeVariant::Last.pick(&variants), Some("high"));
    assert_eq!(EnlargeVariant::Index(1).pick(&variants), Some("mid"));
}

#[test]
fn enlarge_variant_index_out_of_range_falls_back_to_last() {
    let variants = vec!["only".to_owned()];
    assert_eq!(EnlargeVariant::Index(1).pick(&variants), Some("only"));
    assert_eq!(EnlargeVariant::Index(3).pick(&[]), None);
}
