use super::*;
use crate::config::ApiRoutes;

#[test]
fn http_api_urls_follow_config() {
    let api = HttpImageApi::new(&GalleryConfig::default());
    assert_eq!(api.list_url, "http://localhost:3001/images");
    assert_eq!(api.upload_url, "http://localhost:3001/images/upload");
}

#[test]
fn http_api_urls_follow_imagenes_routes() {
    let config = GalleryConfig {
        api_base: "https://img.example.test".to_owned(),
        routes: ApiRoutes::Imagenes,
        ..GalleryConfig::default()
    };
    let api = HttpImageApi::new(&config);
    assert_eq!(api.list_url, "https://img.example.test/imagenes/all");
    assert_eq!(api.upload_url, "https://img.example.test/imagenes/upload");
}

#[test]
fn upload_field_is_file() {
    assert_eq!(UPLOAD_FIELD, "file");
}

#[test]
fn api_error_messages_include_cause() {
    assert_eq!(ApiError::Status { status: 500 }.to_string(), "unexpected status: 500");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "response decode failed: eof");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpImageApi::new(&GalleryConfig::default());
    let result = futures::executor::block_on(api.list_images());
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
