//! Media references for exhibits: model files and static map thumbnails.
//!
//! Only URLs are produced here; fetching and caching belong to the host.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::exhibit::GeoPoint;

/// Level of detail of an exhibit model.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModelDetail {
    /// Reduced mesh shown in the overview.
    #[default]
    Low,
    /// Full mesh fetched once an exhibit is inspected.
    High,
}

impl ModelDetail {
    /// File name of the model within the exhibit's directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ModelDetail::Low => "3DModel_LowPoly.glb",
            ModelDetail::High => "3DModel.glb",
        }
    }
}

/// Static map image request settings.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapConfig {
    pub username: String,
    pub style_id: String,
    pub access_token: String,
    pub width: u32,
    pub height: u32,
    pub zoom: u32,
    /// Request a double-density image.
    pub retina: bool,
}

impl StaticMapConfig {
    pub const BASE_URL: &'static str = "https://api.mapbox.com/styles/v1";

    /// 400x200 @2x thumbnails at zoom 4.
    pub fn new(
        username: impl Into<String>,
        style_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            style_id: style_id.into(),
            access_token: access_token.into(),
            width: 400,
            height: 200,
            zoom: 4,
            retina: true,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_retina(mut self, retina: bool) -> Self {
        self.retina = retina;
        self
    }

    /// Thumbnail URL centred on `location`. The service expects longitude first.
    pub fn thumbnail_url(&self, location: GeoPoint) -> String {
        let density = if self.retina { "@2x" } else { "" };
        format!(
            "{}/{}/{}/static/{},{},{}/{}x{}{}/?access_token={}",
            Self::BASE_URL,
            self.username,
            self.style_id,
            location.lon,
            location.lat,
            self.zoom,
            self.width,
            self.height,
            density,
            self.access_token,
        )
    }
}

/// Where exhibit media lives.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MediaConfig {
    /// Directory URL holding one sub-directory per exhibit id.
    pub model_base_url: String,
    /// Map thumbnails, if configured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub map: Option<StaticMapConfig>,
}

impl MediaConfig {
    pub fn new(model_base_url: impl Into<String>) -> Self {
        Self {
            model_base_url: model_base_url.into(),
            map: None,
        }
    }

    pub fn with_map(mut self, map: StaticMapConfig) -> Self {
        self.map = Some(map);
        self
    }

    /// URL of the model file for `exhibit_id` at `detail`.
    pub fn model_url(&self, exhibit_id: &str, detail: ModelDetail) -> String {
        format!(
            "{}/{}/{}",
            self.model_base_url.trim_end_matches('/'),
            exhibit_id,
            detail.file_name()
        )
    }

    /// Map thumbnail URL, or `None` without a map configuration.
    pub fn map_thumbnail_url(&self, location: GeoPoint) -> Option<String> {
        self.map.as_ref().map(|m| m.thumbnail_url(location))
    }
}
