use super::*;

#[test]
fn locale_default_is_english() {
    assert_eq!(Locale::default(), Locale::En);
}

#[test]
fn locale_from_tag_uses_primary_subtag() {
    assert_eq!(Locale::from_tag("es"), Some(Locale::Es));
    assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
    assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
    assert_eq!(Locale::from_tag("fr"), None);
    assert_eq!(Locale::from_tag(""), None);
}

#[test]
fn spanish_upload_messages_match_original_wording() {
    assert_eq!(text(Locale::Es, Message::SelectFileFirst), "Selecciona un archivo para subir.");
    assert_eq!(text(Locale::Es, Message::UploadFailed), "Error al subir la imagen.");
    assert_eq!(text(Locale::Es, Message::Title), "Galería de Imágenes");
}

#[test]
fn every_message_is_non_empty_in_every_locale() {
    let all = [
        Message::Title,
        Message::UploadButton,
        Message::Uploading,
        Message::Loading,
        Message::EmptyGallery,
        Message::ThumbnailAlt,
        Message::EnlargedAlt,
        Message::NoFileChosen,
        Message::NotAnImage,
        Message::FileTooLarge,
        Message::FileUnreadable,
        Message::SelectFileFirst,
        Message::UploadFailed,
        Message::UploadUnrecognized,
        Message::ListFailed,
    ];
    for locale in [Locale::En, Locale::Es] {
        for message in all {
            assert!(!text(locale, message).is_empty(), "{locale:?} {message:?}");
        }
    }
}

#[test]
fn locales_differ_for_user_errors() {
    assert_ne!(text(Locale::En, Message::UploadFailed), text(Locale::Es, Message::UploadFailed));
}
