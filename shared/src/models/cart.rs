//! Cart Model

use serde::{Deserialize, Serialize};

use super::product::{Product, Variant};
use crate::error::TransformError;
use crate::util::coerce::{self, RawId, id_or_empty, lenient_f64};

/// Product summary nested under a cart item's variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProductDto {
    pub id: Option<RawId>,
    pub name: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
}

/// Variant nested under a cart item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartVariantDto {
    pub id: Option<RawId>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock: Option<u32>,
    pub product_id: Option<RawId>,
    pub product: Option<CartProductDto>,
}

/// Cart item as returned by `/cart`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub cart_item_id: Option<RawId>,
    #[serde(default)]
    pub quantity: u32,
    pub variant: Option<CartVariantDto>,
}

/// Cart line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Absent for lines not yet persisted server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_item_id: Option<String>,
    pub product: Product,
    pub variant: Variant,
    pub quantity: u32,
}

impl TryFrom<CartItemDto> for CartItem {
    type Error = TransformError;

    fn try_from(dto: CartItemDto) -> Result<Self, Self::Error> {
        let backend_variant = dto.variant.ok_or(TransformError::MissingVariant)?;

        let variant = Variant {
            id: id_or_empty(backend_variant.id.as_ref()),
            product_id: id_or_empty(backend_variant.product_id.as_ref()),
            color: backend_variant.color.unwrap_or_default(),
            size: backend_variant.size.unwrap_or_default(),
            stock: backend_variant.stock.unwrap_or(0),
            ..Default::default()
        };

        let product = match backend_variant.product {
            Some(p) => Product::partial(
                id_or_empty(p.id.as_ref()),
                p.name.unwrap_or_default(),
                p.price.unwrap_or_default(),
                p.image.unwrap_or_default(),
            ),
            None => Product::partial(variant.product_id.clone(), String::new(), 0.0, String::new()),
        };

        Ok(Self {
            cart_item_id: dto.cart_item_id.as_ref().map(ToString::to_string),
            product,
            variant,
            quantity: dto.quantity,
        })
    }
}

/// Body of `POST /cart`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAdd {
    #[serde(serialize_with = "coerce::id_as_number")]
    pub variant_id: RawId,
    pub quantity: u32,
}

/// Body of `PUT /cart/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct CartQuantity {
    pub quantity: u32,
}
