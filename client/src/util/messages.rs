//! User-facing strings for the gallery view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reducer stores error text as plain strings, so every message the user
//! can see is resolved here against the configured [`Locale`].

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Display language for gallery text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Parse a locale tag such as `"es"` or `"en-US"`. Only the primary
    /// subtag is considered.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// Every piece of text the gallery renders or reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Title,
    UploadButton,
    Uploading,
    Loading,
    EmptyGallery,
    ThumbnailAlt,
    EnlargedAlt,
    NoFileChosen,
    NotAnImage,
    FileTooLarge,
    FileUnreadable,
    SelectFileFirst,
    UploadFailed,
    UploadUnrecognized,
    ListFailed,
}

/// Resolve `message` in `locale`.
pub fn text(locale: Locale, message: Message) -> &'static str {
    match locale {
        Locale::En => english(message),
        Locale::Es => spanish(message),
    }
}

fn english(message: Message) -> &'static str {
    match message {
        Message::Title => "Image Gallery",
        Message::UploadButton => "Upload Image",
        Message::Uploading => "Uploading...",
        Message::Loading => "Loading images...",
        Message::EmptyGallery => "No images yet.",
        Message::ThumbnailAlt => "Uploaded image",
        Message::EnlargedAlt => "Enlarged image",
        Message::NoFileChosen => "No file was chosen.",
        Message::NotAnImage => "Only image files can be uploaded.",
        Message::FileTooLarge => "The image must be 5 MB or smaller.",
        Message::FileUnreadable => "The selected file could not be read.",
        Message::SelectFileFirst => "Select a file to upload.",
        Message::UploadFailed => "Error uploading the image.",
        Message::UploadUnrecognized => "The upload finished but the server reply was not understood.",
        Message::ListFailed => "Error loading the images.",
    }
}

fn spanish(message: Message) -> &'static str {
    match message {
        Message::Title => "Galería de Imágenes",
        Message::UploadButton => "Subir Imagen",
        Message::Uploading => "Subiendo...",
        Message::Loading => "Cargando imágenes...",
        Message::EmptyGallery => "Todavía no hay imágenes.",
        Message::ThumbnailAlt => "Imagen subida",
        Message::EnlargedAlt => "Imagen ampliada",
        Message::NoFileChosen => "No se eligió ningún archivo.",
        Message::NotAnImage => "Solo se pueden subir archivos de imagen.",
        Message::FileTooLarge => "La imagen debe pesar 5 MB o menos.",
        Message::FileUnreadable => "No se pudo leer el archivo seleccionado.",
        Message::SelectFileFirst => "Selecciona un archivo para subir.",
        Message::UploadFailed => "Error al subir la imagen.",
        Message::UploadUnrecognized => "La imagen se subió pero la respuesta del servidor no es válida.",
        Message::ListFailed => "Error al cargar las imágenes.",
    }
}
