use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Account & Auth Schemas ---

/// User
///
/// The user record as the storefront service returns it, both inside auth
/// responses and from the admin user endpoints. Identifiers stay opaque
/// strings because the service owns their shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // The RBAC field: 'user' or 'admin'. Kept raw here; the routing layer
    // owns the mapping to a closed role set.
    pub role: String,
}

/// LoginRequest
///
/// Input payload for POST /login.
/// Note: The password is only passed through to the service and never
/// persisted or logged by this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// LoginResponse
///
/// Output of a successful login: the bearer token plus the resolved user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// RegisterRequest
///
/// Input payload for POST /register.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// RegisterResponse
///
/// Output of a successful registration. The account still has to sign in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterResponse {
    pub user: User,
}

/// UpdateUserRequest
///
/// Partial update payload for the admin user editor (PUT /admin/users/{id}).
///
/// *Note*: Uses `Option<T>` plus `#[serde(skip_serializing_if = "Option::is_none")]`
/// so only the fields the admin actually changed travel over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// UpdateProfileRequest
///
/// Partial update payload for the signed-in user's own profile (PUT /profile).
/// Password changes ride along as a current/new pair.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// UpdateProfileResponse
///
/// Output of a profile update: the user record as the service now sees it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProfileResponse {
    pub user: User,
}

// --- Catalog Schemas ---

/// Product
///
/// A catalog entry. Also the element type of the wishlist listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

/// ProductsResponse
///
/// One page of the catalog listing (GET /products).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

/// ProductFilters
///
/// Optional query parameters for the catalog listing. Every field the caller
/// leaves unset stays off the wire entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    // Transmitted as `sort_by`, see `to_query`.
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductFilters {
    /// Flattens the set fields into query pairs.
    ///
    /// The service expects the sort field under the snake_case key `sort_by`
    /// while every other key stays camelCase, so this cannot be a plain
    /// serialization of the struct.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if let Some(category) = &self.category {
            query.push(("category".to_string(), category.clone()));
        }
        if let Some(min_price) = self.min_price {
            query.push(("minPrice".to_string(), min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            query.push(("maxPrice".to_string(), max_price.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sort_by".to_string(), sort_by.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }
}

// --- Dashboard Schemas ---

/// DashboardData
///
/// Output schema for the account dashboard (GET /dashboard).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_orders: u64,
    pub wishlist_items: u64,
    pub unread_notifications: u64,
    pub recent_orders: Vec<Order>,
}

// --- Notification Schemas ---

/// Notification
///
/// A notification as listed by GET /notifications.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,

    // Sent as "type" in JSON; `type` is a reserved keyword in Rust.
    #[serde(rename = "type")]
    pub notification_type: String,

    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// --- Order Schemas ---

/// OrderItem
///
/// One line of a placed order, priced as it was at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Order
///
/// An order record, used by the order history, the order detail view and the
/// dashboard's recent-orders strip.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// CartItem
///
/// One line of the cart as submitted at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
}

/// CreateOrderRequest
///
/// Input payload for checkout (POST /orders).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub address_id: String,
    pub payment_method_id: String,
    pub items: Vec<CartItem>,
}

// --- Address Schemas ---

/// Address
///
/// A saved shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub full_name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: Option<String>,
    pub is_default: bool,
}

/// AddressRequest
///
/// Input payload for creating (POST /addresses) and replacing
/// (PUT /addresses/{id}) an address. Default flags move through the
/// dedicated PATCH endpoint instead.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub full_name: String,
    pub line1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    pub city: String,
    pub postal_code: String,
    pub country: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// --- Payment Method Schemas ---

/// PaymentMethod
///
/// A stored payment method. Card entries carry the brand/last4/expiry
/// fields, PayPal entries carry the account email; the rest stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,

    // "card" | "paypal". Sent as "type" in JSON.
    #[serde(rename = "type")]
    pub method_type: String,

    pub brand: Option<String>,
    pub last4: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub email: Option<String>,
    pub is_default: bool,
}

/// AddPaymentMethodRequest
///
/// Input payload for POST /payment-methods, covering both the new-card and
/// the new-PayPal flow. Fields that do not apply to the chosen type are left
/// unset and stay off the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentMethodRequest {
    #[serde(rename = "type")]
    pub method_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// UpdatePaymentMethodRequest
///
/// Partial update payload for PATCH /payment-methods/{id}: expiry
/// corrections and the default flag are the only editable pieces.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentMethodRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}
