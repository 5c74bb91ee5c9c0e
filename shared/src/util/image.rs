//! CDN image URL rewriting
//!
//! Product images live on Cloudinary. Delivery transformations (format,
//! quality, bounding box) are requested by inserting a directive segment
//! right after `/upload/` in the asset URL.

/// Host marker identifying CDN-served assets.
pub const CDN_HOST: &str = "cloudinary.com";

const UPLOAD_SEGMENT: &str = "/upload/";

/// Default edge length for listing thumbnails.
pub const THUMBNAIL_SIZE: u32 = 600;

/// Default edge length for product detail images.
pub const LARGE_IMAGE_SIZE: u32 = 1200;

/// Delivery quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageQuality {
    #[default]
    Auto,
    AutoLow,
    AutoEco,
    AutoGood,
    AutoBest,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::AutoLow => "auto:low",
            Self::AutoEco => "auto:eco",
            Self::AutoGood => "auto:good",
            Self::AutoBest => "auto:best",
        }
    }
}

/// Delivery format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageFormat {
    #[default]
    Auto,
    Webp,
    Avif,
    Jpg,
    Png,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Webp => "webp",
            Self::Avif => "avif",
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Transformation request for [`optimize_image_url`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: ImageQuality,
    pub format: ImageFormat,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn quality(mut self, quality: ImageQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    fn directives(&self) -> String {
        let mut parts = vec![
            format!("f_{}", self.format.as_str()),
            format!("q_{}", self.quality.as_str()),
        ];
        // zero means "unbounded"
        let width = self.width.filter(|w| *w > 0);
        let height = self.height.filter(|h| *h > 0);
        if let Some(w) = width {
            parts.push(format!("w_{w}"));
        }
        if let Some(h) = height {
            parts.push(format!("h_{h}"));
        }
        // c_limit never upscales
        if width.is_some() || height.is_some() {
            parts.push("c_limit".to_string());
        }
        parts.join(",")
    }
}

/// Rewrite a CDN asset URL to request the given transformation.
///
/// Non-CDN URLs (and empty strings) come back unchanged.
pub fn optimize_image_url(url: &str, options: &ImageOptions) -> String {
    if url.is_empty() || !url.contains(CDN_HOST) {
        return url.to_string();
    }
    let replacement = format!("{UPLOAD_SEGMENT}{}/", options.directives());
    url.replacen(UPLOAD_SEGMENT, &replacement, 1)
}

/// Listing thumbnail, best automatic quality.
pub fn thumbnail_url(url: &str, size: u32) -> String {
    optimize_image_url(
        url,
        &ImageOptions::new().width(size).quality(ImageQuality::AutoBest),
    )
}

/// Detail-page image, good automatic quality.
pub fn large_image_url(url: &str, size: u32) -> String {
    optimize_image_url(
        url,
        &ImageOptions::new().width(size).quality(ImageQuality::AutoGood),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN_URL: &str = "https://res.cloudinary.com/demo/image/upload/v1712/shirt.jpg";

    #[test]
    fn test_non_cdn_url_unchanged() {
        let url = "https://example.com/upload/shirt.jpg";
        assert_eq!(optimize_image_url(url, &ImageOptions::new().width(400)), url);
        assert_eq!(optimize_image_url("", &ImageOptions::new()), "");
    }

    #[test]
    fn test_defaults_only_format_and_quality() {
        assert_eq!(
            optimize_image_url(CDN_URL, &ImageOptions::new()),
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto/v1712/shirt.jpg"
        );
    }

    #[test]
    fn test_width_only_adds_limit_crop() {
        assert_eq!(
            optimize_image_url(CDN_URL, &ImageOptions::new().width(400)),
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_400,c_limit/v1712/shirt.jpg"
        );
    }

    #[test]
    fn test_height_only_adds_limit_crop() {
        assert_eq!(
            optimize_image_url(CDN_URL, &ImageOptions::new().height(300)),
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,h_300,c_limit/v1712/shirt.jpg"
        );
    }

    #[test]
    fn test_full_options() {
        let opts = ImageOptions::new()
            .width(800)
            .height(600)
            .quality(ImageQuality::AutoEco)
            .format(ImageFormat::Webp);
        assert_eq!(
            optimize_image_url(CDN_URL, &opts),
            "https://res.cloudinary.com/demo/image/upload/f_webp,q_auto:eco,w_800,h_600,c_limit/v1712/shirt.jpg"
        );
    }

    #[test]
    fn test_preset_helpers() {
        assert!(thumbnail_url(CDN_URL, THUMBNAIL_SIZE).contains("/upload/f_auto,q_auto:best,w_600,c_limit/"));
        assert!(large_image_url(CDN_URL, LARGE_IMAGE_SIZE).contains("/upload/f_auto,q_auto:good,w_1200,c_limit/"));
    }
}
