//! Order Model

use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::product::{Product, Variant};
use crate::util::coerce::{self, RawId, id_or_empty, lenient_f64};
use crate::util::date::display_date;

/// Payment method assumed when the backend omits one
pub const DEFAULT_PAYMENT_METHOD: &str = "BANK_TRANSFER";

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

/// How the parcel reaches the customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethod {
    #[default]
    HomeDelivery,
    StorePickup,
}

impl ShippingMethod {
    /// Only the literal `STORE_PICKUP` selects pickup.
    pub fn from_method(method: &str) -> Self {
        if method == "STORE_PICKUP" {
            Self::StorePickup
        } else {
            Self::HomeDelivery
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomeDelivery => "HOME_DELIVERY",
            Self::StorePickup => "STORE_PICKUP",
        }
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// Order line as returned inside `OrderDto`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: Option<RawId>,
    pub variant_id: Option<RawId>,
    pub sku_code: Option<String>,
    pub product_name: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: u32,
}

/// Order as returned by `/orders*`
///
/// Recipient and shipping fields are flat on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: RawId,
    pub user_id: Option<RawId>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: Option<f64>,
    pub status: Option<String>,
    pub payment_method: Option<String>,
    pub shipping_method: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub payment_note: Option<String>,
    pub created_at: Option<String>,
    pub items: Option<Vec<OrderItemDto>>,
}

// =============================================================================
// View models
// =============================================================================

/// Recipient and delivery details.
///
/// Used both as checkout input and, rebuilt from flat fields, on `Order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Payment method, or `STORE_PICKUP` to select in-store pickup
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
}

/// One order line: the variant and product as they were when ordered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub variant: Variant,
    pub product: Product,
    pub price: f64,
    pub quantity: u32,
}

impl From<OrderItemDto> for OrderItem {
    fn from(dto: OrderItemDto) -> Self {
        let price = dto.price.unwrap_or_default();
        let variant = Variant {
            id: id_or_empty(dto.variant_id.as_ref()),
            sku_code: dto.sku_code.unwrap_or_default(),
            color: dto.color.unwrap_or_default(),
            size: dto.size.unwrap_or_default(),
            ..Default::default()
        };
        let product = Product::partial(
            String::new(),
            dto.product_name.unwrap_or_default(),
            price,
            String::new(),
        );
        Self {
            variant,
            product,
            price,
            quantity: dto.quantity,
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: Option<String>,
    pub user_name: String,
    pub user_email: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
    pub payment_method: Option<String>,
    pub shipping_method: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub shipping_address: String,
    /// Present only when the order has a recipient
    pub shipping_details: Option<ShippingDetails>,
    pub payment_note: Option<String>,
    pub created_at: Option<String>,
    /// Display date derived from `created_at`
    pub date: Option<String>,
}

impl From<OrderDto> for Order {
    fn from(dto: OrderDto) -> Self {
        let user_email = dto.user_email.unwrap_or_default();
        let shipping_details = dto
            .recipient_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| ShippingDetails {
                full_name: name.to_string(),
                phone: dto.recipient_phone.clone().unwrap_or_default(),
                email: user_email.clone(),
                method: dto
                    .payment_method
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
                address: dto.shipping_address.clone(),
                store_name: None,
            });
        let date = dto.created_at.as_deref().and_then(display_date);

        Self {
            id: dto.id.to_string(),
            user_id: dto.user_id.as_ref().map(ToString::to_string),
            user_name: dto.user_name.unwrap_or_default(),
            user_email,
            items: dto
                .items
                .unwrap_or_default()
                .into_iter()
                .map(OrderItem::from)
                .collect(),
            total: dto.total.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            payment_method: dto.payment_method,
            shipping_method: dto
                .shipping_method
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| ShippingMethod::HomeDelivery.as_str().to_string()),
            recipient_name: dto.recipient_name.unwrap_or_default(),
            recipient_phone: dto.recipient_phone.unwrap_or_default(),
            shipping_address: dto.shipping_address.unwrap_or_default(),
            shipping_details,
            payment_note: dto.payment_note,
            created_at: dto.created_at,
            date,
        }
    }
}

// =============================================================================
// Request payloads
// =============================================================================

/// Checkout input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Vec<CartItem>,
    pub shipping_details: ShippingDetails,
}

/// One requested line in `OrderCreateRequest`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    #[serde(serialize_with = "coerce::id_as_number")]
    pub variant_id: RawId,
    pub quantity: u32,
}

/// Wire body of `POST /orders`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub shipping_method: ShippingMethod,
    pub payment_method: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub shipping_address: String,
    pub items: Vec<OrderLineRequest>,
}

impl From<&OrderCreate> for OrderCreateRequest {
    fn from(order: &OrderCreate) -> Self {
        let details = &order.shipping_details;
        // street address first, then pickup store name
        let shipping_address = details
            .address
            .iter()
            .chain(details.store_name.iter())
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default();

        Self {
            shipping_method: ShippingMethod::from_method(&details.method),
            payment_method: details.method.clone(),
            recipient_name: details.full_name.clone(),
            recipient_phone: details.phone.clone(),
            shipping_address,
            items: order
                .items
                .iter()
                .map(|item| OrderLineRequest {
                    variant_id: RawId::from(&item.variant.id),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Body of `PATCH /orders/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Body of `PATCH /orders/{id}/payment-note`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNoteUpdate {
    pub payment_note: String,
}
