//! Product Model
//!
//! `ProductDto` / `VariantDto` are the backend wire shapes. `Product` /
//! `Variant` are the view models handed to callers: string ids, filled
//! defaults, variants attached by a follow-up call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::util::coerce::{self, RawId, id_or_empty, lenient_f64};

/// Color name → gallery image URLs
pub type ColorImages = BTreeMap<String, Vec<String>>;

/// Maximum number of products shown in the featured strip.
pub const MAX_FEATURED: usize = 5;

// =============================================================================
// Wire types
// =============================================================================

/// Product as returned by `/products*` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: RawId,
    pub category_id: Option<RawId>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    /// Primary image URL
    pub image: Option<String>,
    pub color_images: Option<ColorImages>,
    pub is_listed: Option<bool>,
    pub is_featured: Option<bool>,
    /// Aggregated stock across variants, computed by the backend
    pub stock: Option<u32>,
    pub created_at: Option<String>,
    /// Category display name
    pub category: Option<String>,
}

/// Variant as returned by `/products/{id}/variants` and `/variants*`
///
/// Older endpoints key the identifier as `variantId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDto {
    pub id: Option<RawId>,
    pub variant_id: Option<RawId>,
    pub product_id: Option<RawId>,
    pub sku_code: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock: Option<u32>,
    pub created_at: Option<String>,
}

// =============================================================================
// View models
// =============================================================================

/// Product entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    /// Same as `image_url`, kept under the backend's field name
    pub image: String,
    pub color_images: Option<ColorImages>,
    pub is_listed: bool,
    pub is_featured: bool,
    pub created_at: Option<String>,
    pub variants: Vec<Variant>,
    /// Sum of `variants[*].stock` once variants are loaded, otherwise the
    /// backend's aggregate
    pub total_stock: u64,
    pub category: Option<String>,
}

impl Product {
    /// Attach loaded variants and recompute `total_stock` from them.
    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.total_stock = variants.iter().map(|v| u64::from(v.stock)).sum();
        self.variants = variants;
        self
    }

    /// Minimal listed product carrying only what a line item knows.
    pub(crate) fn partial(id: String, name: String, price: f64, image_url: String) -> Self {
        Self {
            id,
            name,
            price,
            image: image_url.clone(),
            image_url,
            is_listed: true,
            ..Default::default()
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        let image = dto.image.unwrap_or_default();
        Self {
            id: dto.id.to_string(),
            category_id: id_or_empty(dto.category_id.as_ref()),
            name: dto.name.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            price: dto.price.unwrap_or_default(),
            image_url: image.clone(),
            image,
            color_images: dto.color_images,
            is_listed: dto.is_listed.unwrap_or(true),
            is_featured: dto.is_featured.unwrap_or(false),
            created_at: dto.created_at,
            variants: Vec::new(),
            total_stock: u64::from(dto.stock.unwrap_or(0)),
            category: dto.category,
        }
    }
}

/// Product variant (color × size SKU)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub product_id: String,
    pub sku_code: String,
    pub color: String,
    pub size: String,
    pub stock: u32,
    pub created_at: Option<String>,
}

impl From<VariantDto> for Variant {
    fn from(dto: VariantDto) -> Self {
        Self {
            id: id_or_empty(dto.id.as_ref().or(dto.variant_id.as_ref())),
            product_id: id_or_empty(dto.product_id.as_ref()),
            sku_code: dto.sku_code.unwrap_or_default(),
            color: dto.color.unwrap_or_default(),
            size: dto.size.unwrap_or_default(),
            stock: dto.stock.unwrap_or(0),
            created_at: dto.created_at,
        }
    }
}

// =============================================================================
// Request payloads
// =============================================================================

/// Create product payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[serde(serialize_with = "coerce::id_as_number")]
    pub category_id: RawId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub is_listed: bool,
    /// Serialized as `null` when absent
    pub color_images: Option<ColorImages>,
}

impl ProductCreate {
    pub fn new(category_id: impl Into<RawId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            category_id: category_id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            is_listed: true,
            color_images: None,
        }
    }
}

/// Update product payload. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::opt_id_as_number"
    )]
    pub category_id: Option<RawId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_listed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_images: Option<ColorImages>,
}

/// Create variant input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCreate {
    pub color: String,
    pub size: String,
    pub stock: u32,
}

/// Create variant wire body. The backend assigns the SKU code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCreateRequest {
    #[serde(serialize_with = "coerce::id_as_number")]
    pub product_id: RawId,
    pub sku_code: String,
    pub color: String,
    pub size: String,
    pub stock: u32,
}

impl VariantCreateRequest {
    pub fn new(product_id: impl Into<RawId>, data: VariantCreate) -> Self {
        Self {
            product_id: product_id.into(),
            sku_code: String::new(),
            color: data.color,
            size: data.size,
            stock: data.stock,
        }
    }
}

/// Update variant payload. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_code: Option<String>,
}

// =============================================================================
// Featured / upload
// =============================================================================

/// Body of `PATCH /products/{id}/featured`, read only for the new flag
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedDto {
    #[serde(default)]
    pub is_featured: bool,
}

/// Result of toggling a product's featured flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedToggle {
    pub is_featured: bool,
    /// Status line for the admin toast
    pub message: String,
}

impl From<FeaturedDto> for FeaturedToggle {
    fn from(dto: FeaturedDto) -> Self {
        let message = if dto.is_featured {
            "已加入新品上架"
        } else {
            "已從新品上架移除"
        };
        Self {
            is_featured: dto.is_featured,
            message: message.to_string(),
        }
    }
}

/// Uploaded image location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}
