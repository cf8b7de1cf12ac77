//! Image CDN URLs for content-system image references.
//!
//! Asset refs look like `image-<hash>-<width>x<height>-<ext>` and resolve to
//! `https://cdn.sanity.io/images/<project>/<dataset>/<hash>-<width>x<height>.<ext>`
//! with transforms appended as query parameters.
//!
//! The editor's crop and hotspot only shape the `rect` parameter, and only
//! when no explicit crop mode is requested. With both a width and a height
//! the rect is trimmed to the requested aspect ratio and centred on the
//! hotspot, kept inside the crop. Focal-point parameters (`fp-x`, `fp-y`)
//! are never derived from the hotspot.

use crate::models::{Hotspot, ImageCrop, ImageRef};

const CDN_BASE: &str = "https://cdn.sanity.io/images";

const NO_CROP: ImageCrop = ImageCrop {
    top: 0.0,
    bottom: 0.0,
    left: 0.0,
    right: 0.0,
};

const FULL_HOTSPOT: Hotspot = Hotspot {
    x: 0.5,
    y: 0.5,
    width: 1.0,
    height: 1.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Crop,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crop => "crop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    FocalPoint,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FocalPoint => "focalpoint",
        }
    }
}

/// Project coordinates for the image CDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub project_id: String,
    pub dataset: String,
}

impl ImageSource {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn image<'a>(&'a self, image: &'a ImageRef) -> ImageUrlBuilder<'a> {
        ImageUrlBuilder {
            source: self,
            image,
            width: None,
            height: None,
            fit: None,
            crop: None,
            auto_format: false,
        }
    }
}

/// Chainable transform options; `url()` renders the final URL.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder<'a> {
    source: &'a ImageSource,
    image: &'a ImageRef,
    width: Option<u32>,
    height: Option<u32>,
    fit: Option<Fit>,
    crop: Option<CropMode>,
    auto_format: bool,
}

impl<'a> ImageUrlBuilder<'a> {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn crop(mut self, crop: CropMode) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Let the CDN pick the best format the client accepts.
    pub fn auto_format(mut self) -> Self {
        self.auto_format = true;
        self
    }

    /// Render the URL. `None` when the asset ref cannot be parsed.
    pub fn url(&self) -> Option<String> {
        let asset = parse_asset_ref(&self.image.asset.reference)?;
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(rect) = self.source_rect(&asset) {
            let (left, top, w, h) = (
                rect.left.round() as i64,
                rect.top.round() as i64,
                rect.width.round() as i64,
                rect.height.round() as i64,
            );
            if left != 0 || top != 0 || w != asset.width as i64 || h != asset.height as i64 {
                params.push(("rect", format!("{left},{top},{w},{h}")));
            }
        }
        if let Some(w) = self.width {
            params.push(("w", w.to_string()));
        }
        if let Some(h) = self.height {
            params.push(("h", h.to_string()));
        }
        if let Some(fit) = self.fit {
            params.push(("fit", fit.as_str().to_string()));
        }
        if let Some(crop) = self.crop {
            params.push(("crop", crop.as_str().to_string()));
        }
        if self.auto_format {
            params.push(("auto", "format".to_string()));
        }

        let mut url = format!(
            "{CDN_BASE}/{}/{}/{}-{}x{}.{}",
            self.source.project_id,
            self.source.dataset,
            asset.id,
            asset.width,
            asset.height,
            asset.format
        );
        if !params.is_empty() {
            let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        Some(url)
    }

    /// Source rectangle in pixels, or `None` when an explicit crop mode
    /// hands cropping to the CDN.
    fn source_rect(&self, asset: &AssetParts<'_>) -> Option<Rect> {
        if self.crop.is_some() {
            return None;
        }
        let (img_w, img_h) = (asset.width as f64, asset.height as f64);
        let c = self.image.crop.unwrap_or(NO_CROP);
        let crop = Rect {
            left: c.left * img_w,
            top: c.top * img_h,
            width: img_w - c.right * img_w - c.left * img_w,
            height: img_h - c.bottom * img_h - c.top * img_h,
        };

        let (Some(out_w), Some(out_h)) = (self.width, self.height) else {
            return Some(crop);
        };

        let hs = self.image.hotspot.unwrap_or(FULL_HOTSPOT);
        let (center_x, center_y) = ((hs.x * img_w).round(), (hs.y * img_h).round());
        let desired = out_w as f64 / out_h as f64;

        if crop.width / crop.height > desired {
            // wider than requested: keep crop height, slide horizontally
            let height = crop.height.round();
            let width = (height * desired).round();
            let top = crop.top.round().max(0.0);
            let mut left = (center_x - width / 2.0).round().max(0.0);
            if left < crop.left {
                left = crop.left;
            } else if left + width > crop.left + crop.width {
                left = crop.left + crop.width - width;
            }
            Some(Rect {
                left,
                top,
                width,
                height,
            })
        } else {
            let width = crop.width;
            let height = (width / desired).round();
            let left = crop.left.round().max(0.0);
            let mut top = (center_y - height / 2.0).round().max(0.0);
            if top < crop.top {
                top = crop.top;
            } else if top + height > crop.top + crop.height {
                top = crop.top + crop.height - height;
            }
            Some(Rect {
                left,
                top,
                width,
                height,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, PartialEq, Eq)]
struct AssetParts<'a> {
    id: &'a str,
    width: u32,
    height: u32,
    format: &'a str,
}

fn parse_asset_ref(reference: &str) -> Option<AssetParts<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (id, dims) = rest.rsplit_once('-')?;
    let (w, h) = dims.split_once('x')?;
    if id.is_empty() || format.is_empty() {
        return None;
    }
    Some(AssetParts {
        id,
        width: w.parse().ok()?,
        height: h.parse().ok()?,
        format,
    })
}
