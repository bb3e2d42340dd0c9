//! Gallery configuration parsed from `GALLERY_*` key/value pairs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle and the SSR host must agree on the API location and on
//! the response-handling policies, so the values are baked in at build time
//! (`option_env!`) rather than read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::messages::Locale;

pub const DEFAULT_API_BASE: &str = "http://localhost:3001";
/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Errors produced while building a [`GalleryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A key was present but its value is not one of the accepted spellings.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Endpoint layout of the remote image API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiRoutes {
    /// `GET /images`, `POST /images/upload`.
    #[default]
    Standard,
    /// `GET /imagenes/all`, `POST /imagenes/upload`.
    Imagenes,
}

impl ApiRoutes {
    pub fn list_path(self) -> &'static str {
        match self {
            Self::Standard => "/images",
            Self::Imagenes => "/imagenes/all",
        }
    }

    pub fn upload_path(self) -> &'static str {
        match self {
            Self::Standard => "/images/upload",
            Self::Imagenes => "/imagenes/upload",
        }
    }
}

/// Which rendition of an image the enlarge overlay shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnlargeVariant {
    #[default]
    First,
    Last,
    /// A fixed position; falls back to the last variant when out of range.
    Index(usize),
}

impl EnlargeVariant {
    /// Pick a variant URL, or `None` when `variants` is empty.
    pub fn pick(self, variants: &[String]) -> Option<&str> {
        let chosen = match self {
            Self::First => variants.first(),
            Self::Last => variants.last(),
            Self::Index(i) => variants.get(i).or_else(|| variants.last()),
        };
        chosen.map(String::as_str)
    }
}

/// Reaction to an upload response that lacks a usable `result` record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedUploadPolicy {
    /// Log a diagnostic and leave the list unchanged.
    #[default]
    Ignore,
    /// Re-fetch the whole list.
    Refetch,
    /// Show a user-visible error.
    Report,
}

/// How a successful upload is merged into the displayed list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadMerge {
    /// Append the returned record.
    #[default]
    Append,
    /// Ignore the returned record and re-fetch the whole list.
    Refetch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub api_base: String,
    pub routes: ApiRoutes,
    pub enlarge_variant: EnlargeVariant,
    pub malformed_upload: MalformedUploadPolicy,
    pub after_upload: UploadMerge,
    pub locale: Locale,
    pub max_upload_bytes: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            routes: ApiRoutes::default(),
            enlarge_variant: EnlargeVariant::default(),
            malformed_upload: MalformedUploadPolicy::default(),
            after_upload: UploadMerge::default(),
            locale: Locale::default(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl GalleryConfig {
    /// Build config from a key lookup. Missing keys take their defaults.
    ///
    /// Keys:
    /// - `GALLERY_API_BASE`: default `http://localhost:3001`
    /// - `GALLERY_API_ROUTES`: `standard` (default) or `imagenes`
    /// - `GALLERY_ENLARGE_VARIANT`: `first` (default), `last`, or an index
    /// - `GALLERY_MALFORMED_UPLOAD`: `ignore` (default), `refetch`, `report`
    /// - `GALLERY_AFTER_UPLOAD`: `append` (default) or `refetch`
    /// - `GALLERY_LOCALE`: `en` (default) or `es`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any unrecognized value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base = lookup("GALLERY_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base);

        Ok(Self {
            api_base,
            routes: parse_or("GALLERY_API_ROUTES", lookup("GALLERY_API_ROUTES"), defaults.routes, parse_routes)?,
            enlarge_variant: parse_or(
                "GALLERY_ENLARGE_VARIANT",
                lookup("GALLERY_ENLARGE_VARIANT"),
                defaults.enlarge_variant,
                parse_enlarge_variant,
            )?,
            malformed_upload: parse_or(
                "GALLERY_MALFORMED_UPLOAD",
                lookup("GALLERY_MALFORMED_UPLOAD"),
                defaults.malformed_upload,
                parse_malformed_policy,
            )?,
            after_upload: parse_or(
                "GALLERY_AFTER_UPLOAD",
                lookup("GALLERY_AFTER_UPLOAD"),
                defaults.after_upload,
                parse_upload_merge,
            )?,
            locale: parse_or("GALLERY_LOCALE", lookup("GALLERY_LOCALE"), defaults.locale, Locale::from_tag)?,
            max_upload_bytes: defaults.max_upload_bytes,
        })
    }

    /// Build config from values captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Same as [`GalleryConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.api_base, self.routes.list_path())
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_base, self.routes.upload_path())
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "GALLERY_API_BASE" => option_env!("GALLERY_API_BASE"),
        "GALLERY_API_ROUTES" => option_env!("GALLERY_API_ROUTES"),
        "GALLERY_ENLARGE_VARIANT" => option_env!("GALLERY_ENLARGE_VARIANT"),
        "GALLERY_MALFORMED_UPLOAD" => option_env!("GALLERY_MALFORMED_UPLOAD"),
        "GALLERY_AFTER_UPLOAD" => option_env!("GALLERY_AFTER_UPLOAD"),
        "GALLERY_LOCALE" => option_env!("GALLERY_LOCALE"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn parse_or<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    parse(trimmed).ok_or(ConfigError::InvalidValue { key, value: raw })
}

fn parse_routes(raw: &str) -> Option<ApiRoutes> {
    match raw.to_ascii_lowercase().as_str() {
        "standard" | "images" => Some(ApiRoutes::Standard),
        "imagenes" => Some(ApiRoutes::Imagenes),
        _ => None,
    }
}

fn parse_enlarge_variant(raw: &str) -> Option<EnlargeVariant> {
    match raw.to_ascii_lowercase().as_str() {
        "first" => Some(EnlargeVariant::First),
        "last" => Some(EnlargeVariant::Last),
        other => other.parse::<usize>().ok().map(EnlargeVariant::Index),
    }
}

fn parse_malformed_policy(raw: &str) -> Option<MalformedUploadPolicy> {
    match raw.to_ascii_lowercase().as_str() {
        "ignore" => Some(MalformedUploadPolicy::Ignore),
        "refetch" => Some(MalformedUploadPolicy::Refetch),
        "report" => Some(MalformedUploadPolicy::Report),
        _ => None,
    }
}

fn parse_upload_merge(raw: &str) -> Option<UploadMerge> {
    match raw.to_ascii_lowercase().as_str() {
        "append" => Some(UploadMerge::Append),
        "refetch" => Some(UploadMerge::Refetch),
        _ => None,
    }
}
