use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::{
    error::{ApiError, TransportError},
    models::{
        AddPaymentMethodRequest, Address, AddressRequest, CreateOrderRequest, DashboardData,
        LoginRequest, LoginResponse, Notification, Order, PaymentMethod, Product, ProductFilters,
        ProductsResponse, RegisterRequest, RegisterResponse, UpdatePaymentMethodRequest,
        UpdateProfileRequest, UpdateProfileResponse, UpdateUserRequest, User,
    },
    transport::TransportState,
};

/// The message shown when a hardened operation fails in a way the service
/// never got to describe.
const UNEXPECTED_FAILURE: &str = "An unexpected error occurred";

// --- Failure Normalization ---

/// Which error-body field an endpoint family reports under. The auth
/// endpoints use `message`, every other family uses `detail`; the split is
/// the service's convention and has to be preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageField {
    Message,
    Detail,
}

/// FailurePolicy
///
/// How one operation turns a transport failure into the error its caller
/// sees: which body field carries the service's own wording, the canned
/// message used when that field is missing or empty, any status-specific
/// wording, and whether failures outside the request/response contract are
/// masked instead of passed through.
struct FailurePolicy {
    field: MessageField,
    fallback: &'static str,
    overrides: Vec<(u16, &'static str)>,
    mask_unstructured: bool,
}

impl FailurePolicy {
    /// A policy for the auth family, which reports under `message`.
    fn message(fallback: &'static str) -> Self {
        Self {
            field: MessageField::Message,
            fallback,
            overrides: Vec::new(),
            mask_unstructured: false,
        }
    }

    /// A policy for the resource families, which report under `detail`.
    fn detail(fallback: &'static str) -> Self {
        Self {
            field: MessageField::Detail,
            fallback,
            overrides: Vec::new(),
            mask_unstructured: false,
        }
    }

    /// Replaces the extracted message wholesale for one status code. The
    /// override wins even when the error body carries its own wording.
    fn on_status(mut self, status: u16, message: &'static str) -> Self {
        self.overrides.push((status, message));
        self
    }

    /// Masks network-level and decoding failures behind a generic message
    /// instead of passing them through.
    fn mask_unstructured(mut self) -> Self {
        self.mask_unstructured = true;
        self
    }

    fn normalize(&self, error: TransportError) -> ApiError {
        match error {
            TransportError::Status { status, body } => {
                if let Some((_, message)) = self.overrides.iter().find(|(s, _)| *s == status) {
                    return ApiError::Remote((*message).to_string());
                }
                let reported = match self.field {
                    MessageField::Message => body.message,
                    MessageField::Detail => body.detail,
                };
                // An empty string counts as "no usable message".
                let message = reported
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| self.fallback.to_string());
                ApiError::Remote(message)
            }
            unstructured => {
                if self.mask_unstructured {
                    ApiError::Remote(UNEXPECTED_FAILURE.to_string())
                } else {
                    ApiError::Transport(unstructured)
                }
            }
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value, policy: &FailurePolicy) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| policy.normalize(TransportError::Decode(e.to_string())))
}

fn encode<B: Serialize>(payload: &B, policy: &FailurePolicy) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| policy.normalize(TransportError::Decode(e.to_string())))
}

// --- The Gateway ---

/// ApiGateway
///
/// The application's sole channel to the storefront service: one method per
/// remote operation, each issuing exactly one exchange through the shared
/// transport and normalizing failures per its [`FailurePolicy`]. The gateway
/// holds no state of its own beyond the transport handle, so calls are
/// independent and may run concurrently; it never retries, caches, or
/// sequences anything.
#[derive(Clone)]
pub struct ApiGateway {
    transport: TransportState,
}

impl ApiGateway {
    pub fn new(transport: TransportState) -> Self {
        Self { transport }
    }

    /// One exchange whose success body decodes into `T`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
        policy: FailurePolicy,
    ) -> Result<T, ApiError> {
        match self.transport.request(method, path, body, query).await {
            Ok(value) => decode(value, &policy),
            Err(error) => Err(policy.normalize(error)),
        }
    }

    /// One exchange whose success body is ignored.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        policy: FailurePolicy,
    ) -> Result<(), ApiError> {
        match self.transport.request(method, path, body, &[]).await {
            Ok(_) => Ok(()),
            Err(error) => Err(policy.normalize(error)),
        }
    }

    // --- Auth ---

    /// login
    ///
    /// POST /login. Exchanges credentials for a bearer token and the signed-in
    /// user record.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let policy = FailurePolicy::message("Email or password is incorrect");
        let body = encode(credentials, &policy)?;
        self.fetch(Method::POST, "/login", Some(body), &[], policy)
            .await
    }

    /// register
    ///
    /// POST /register. Creates an account; the caller still has to log in.
    pub async fn register(&self, details: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let policy = FailurePolicy::message("Email already registered");
        let body = encode(details, &policy)?;
        self.fetch(Method::POST, "/register", Some(body), &[], policy)
            .await
    }

    /// forgot_password
    ///
    /// POST /forgot-password. Asks the service to mail a reset link.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let policy = FailurePolicy::message("Failed to send reset email");
        self.execute(
            Method::POST,
            "/forgot-password",
            Some(json!({ "email": email })),
            policy,
        )
        .await
    }

    /// reset_password
    ///
    /// POST /reset-password. Redeems a mailed reset token for a new password.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiError> {
        let policy = FailurePolicy::message("Failed to reset password");
        self.execute(
            Method::POST,
            "/reset-password",
            Some(json!({ "token": token, "password": new_password })),
            policy,
        )
        .await
    }

    // --- Admin: User Management ---
    //
    // These operations succeed only for admin sessions; the service rejects
    // everyone else. The client does not pre-check the role.

    /// users
    ///
    /// GET /admin/users. Lists every registered user.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch(
            Method::GET,
            "/admin/users",
            None,
            &[],
            FailurePolicy::detail("Failed to fetch users"),
        )
        .await
    }

    /// user
    ///
    /// GET /admin/users/{id}. Fetches one user for the admin editor.
    pub async fn user(&self, user_id: &str) -> Result<User, ApiError> {
        self.fetch(
            Method::GET,
            &format!("/admin/users/{user_id}"),
            None,
            &[],
            FailurePolicy::detail("Failed to fetch user"),
        )
        .await
    }

    /// update_user
    ///
    /// PUT /admin/users/{id}. Applies the fields the admin changed.
    pub async fn update_user(
        &self,
        user_id: &str,
        changes: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let policy = FailurePolicy::detail("Failed to update user");
        let body = encode(changes, &policy)?;
        self.fetch(
            Method::PUT,
            &format!("/admin/users/{user_id}"),
            Some(body),
            &[],
            policy,
        )
        .await
    }

    /// delete_user
    ///
    /// DELETE /admin/users/{id}.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            &format!("/admin/users/{user_id}"),
            None,
            FailurePolicy::detail("Failed to delete user"),
        )
        .await
    }

    // --- Notifications ---

    /// notifications
    ///
    /// GET /notifications. A 401 answer degrades to an empty list instead of
    /// an error: a signed-out caller simply has nothing to show.
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let policy = FailurePolicy::detail("Failed to fetch notifications");
        match self
            .transport
            .request(Method::GET, "/notifications", None, &[])
            .await
        {
            Ok(value) => decode(value, &policy),
            Err(TransportError::Status { status: 401, .. }) => Ok(Vec::new()),
            Err(error) => Err(policy.normalize(error)),
        }
    }

    /// mark_notification_read
    ///
    /// POST /notifications/{id}/read.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::POST,
            &format!("/notifications/{notification_id}/read"),
            None,
            FailurePolicy::detail("Failed to mark notification as read"),
        )
        .await
    }

    /// mark_all_notifications_read
    ///
    /// POST /notifications/read-all.
    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.execute(
            Method::POST,
            "/notifications/read-all",
            None,
            FailurePolicy::detail("Failed to mark all notifications as read"),
        )
        .await
    }

    /// delete_notification
    ///
    /// DELETE /notifications/{id}.
    pub async fn delete_notification(&self, notification_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            &format!("/notifications/{notification_id}"),
            None,
            FailurePolicy::detail("Failed to delete notification"),
        )
        .await
    }

    /// clear_notifications
    ///
    /// DELETE /notifications. Removes every notification at once.
    pub async fn clear_notifications(&self) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            "/notifications",
            None,
            FailurePolicy::detail("Failed to clear notifications"),
        )
        .await
    }

    // --- Profile ---

    /// update_profile
    ///
    /// PUT /profile. Applies the fields the signed-in user changed.
    pub async fn update_profile(
        &self,
        changes: &UpdateProfileRequest,
    ) -> Result<UpdateProfileResponse, ApiError> {
        let policy = FailurePolicy::detail("Failed to update profile");
        let body = encode(changes, &policy)?;
        self.fetch(Method::PUT, "/profile", Some(body), &[], policy)
            .await
    }

    /// delete_profile
    ///
    /// DELETE /profile. Closes the signed-in user's own account.
    pub async fn delete_profile(&self) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            "/profile",
            None,
            FailurePolicy::detail("Failed to delete account"),
        )
        .await
    }

    // --- Catalog ---

    /// products
    ///
    /// GET /products. Filters are optional; when present they travel as query
    /// parameters with the sort field renamed to `sort_by` (see
    /// [`ProductFilters::to_query`]).
    pub async fn products(
        &self,
        filters: Option<&ProductFilters>,
    ) -> Result<ProductsResponse, ApiError> {
        let query = filters.map(ProductFilters::to_query).unwrap_or_default();
        self.fetch(
            Method::GET,
            "/products",
            None,
            &query,
            FailurePolicy::detail("Failed to fetch products"),
        )
        .await
    }

    /// product
    ///
    /// GET /products/{id}.
    pub async fn product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.fetch(
            Method::GET,
            &format!("/products/{product_id}"),
            None,
            &[],
            FailurePolicy::detail("Failed to fetch product"),
        )
        .await
    }

    // --- Wishlist ---

    /// wishlist
    ///
    /// GET /wishlist. The wishlist is a list of full product records.
    pub async fn wishlist(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch(
            Method::GET,
            "/wishlist",
            None,
            &[],
            FailurePolicy::detail("Failed to fetch wishlist"),
        )
        .await
    }

    /// add_to_wishlist
    ///
    /// POST /wishlist/{productId}.
    pub async fn add_to_wishlist(&self, product_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::POST,
            &format!("/wishlist/{product_id}"),
            None,
            FailurePolicy::detail("Failed to add item to wishlist"),
        )
        .await
    }

    /// remove_from_wishlist
    ///
    /// DELETE /wishlist/{productId}.
    pub async fn remove_from_wishlist(&self, product_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            &format!("/wishlist/{product_id}"),
            None,
            FailurePolicy::detail("Failed to remove item from wishlist"),
        )
        .await
    }

    // --- Dashboard ---

    /// dashboard
    ///
    /// GET /dashboard. Aggregated counters plus the most recent orders.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.fetch(
            Method::GET,
            "/dashboard",
            None,
            &[],
            FailurePolicy::detail("Failed to fetch dashboard data"),
        )
        .await
    }

    // --- Orders ---

    /// orders
    ///
    /// GET /orders. Two deviations from the standard policy: a 401 answer
    /// gets dedicated wording, and failures outside the service contract are
    /// masked rather than passed through, so the order history page always
    /// has a displayable message.
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        let policy = FailurePolicy::detail("Failed to fetch orders")
            .on_status(401, "Please log in to view orders")
            .mask_unstructured();
        self.fetch(Method::GET, "/orders", None, &[], policy).await
    }

    /// order
    ///
    /// GET /orders/{id}.
    pub async fn order(&self, order_id: &str) -> Result<Order, ApiError> {
        self.fetch(
            Method::GET,
            &format!("/orders/{order_id}"),
            None,
            &[],
            FailurePolicy::detail("Failed to fetch order"),
        )
        .await
    }

    /// create_order
    ///
    /// POST /orders. The one operation with money on the line, so every
    /// failure is logged with its transport-level cause before it is reduced
    /// to a display message, and unstructured failures are masked like in
    /// [`ApiGateway::orders`].
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order, ApiError> {
        let policy =
            FailurePolicy::detail("Failed to create order. Please try again.").mask_unstructured();
        let body = encode(order, &policy)?;
        match self
            .transport
            .request(Method::POST, "/orders", Some(body), &[])
            .await
        {
            Ok(value) => decode(value, &policy),
            Err(error) => {
                tracing::error!(error = %error, "order creation failed");
                Err(policy.normalize(error))
            }
        }
    }

    // --- Addresses ---

    /// addresses
    ///
    /// GET /addresses.
    pub async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.fetch(
            Method::GET,
            "/addresses",
            None,
            &[],
            FailurePolicy::detail("Failed to fetch addresses"),
        )
        .await
    }

    /// address
    ///
    /// GET /addresses/{id}.
    pub async fn address(&self, address_id: &str) -> Result<Address, ApiError> {
        self.fetch(
            Method::GET,
            &format!("/addresses/{address_id}"),
            None,
            &[],
            FailurePolicy::detail("Failed to fetch address"),
        )
        .await
    }

    /// create_address
    ///
    /// POST /addresses.
    pub async fn create_address(&self, address: &AddressRequest) -> Result<Address, ApiError> {
        let policy = FailurePolicy::detail("Failed to create address");
        let body = encode(address, &policy)?;
        self.fetch(Method::POST, "/addresses", Some(body), &[], policy)
            .await
    }

    /// update_address
    ///
    /// PUT /addresses/{id}. Full replacement, not a partial patch.
    pub async fn update_address(
        &self,
        address_id: &str,
        address: &AddressRequest,
    ) -> Result<Address, ApiError> {
        let policy = FailurePolicy::detail("Failed to update address");
        let body = encode(address, &policy)?;
        self.fetch(
            Method::PUT,
            &format!("/addresses/{address_id}"),
            Some(body),
            &[],
            policy,
        )
        .await
    }

    /// delete_address
    ///
    /// DELETE /addresses/{id}.
    pub async fn delete_address(&self, address_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            &format!("/addresses/{address_id}"),
            None,
            FailurePolicy::detail("Failed to delete address"),
        )
        .await
    }

    /// set_default_address
    ///
    /// PATCH /addresses/{id}/default. Makes this the address checkout
    /// preselects; the service clears the flag on the previous default.
    pub async fn set_default_address(&self, address_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::PATCH,
            &format!("/addresses/{address_id}/default"),
            None,
            FailurePolicy::detail("Failed to set default address"),
        )
        .await
    }

    // --- Payment Methods ---

    /// payment_methods
    ///
    /// GET /payment-methods.
    pub async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.fetch(
            Method::GET,
            "/payment-methods",
            None,
            &[],
            FailurePolicy::detail("Failed to fetch payment methods"),
        )
        .await
    }

    /// add_payment_method
    ///
    /// POST /payment-methods. Covers both the card and the PayPal flow.
    pub async fn add_payment_method(
        &self,
        method: &AddPaymentMethodRequest,
    ) -> Result<PaymentMethod, ApiError> {
        let policy = FailurePolicy::detail("Failed to add payment method");
        let body = encode(method, &policy)?;
        self.fetch(Method::POST, "/payment-methods", Some(body), &[], policy)
            .await
    }

    /// update_payment_method
    ///
    /// PATCH /payment-methods/{id}.
    pub async fn update_payment_method(
        &self,
        method_id: &str,
        changes: &UpdatePaymentMethodRequest,
    ) -> Result<PaymentMethod, ApiError> {
        let policy = FailurePolicy::detail("Failed to update payment method");
        let body = encode(changes, &policy)?;
        self.fetch(
            Method::PATCH,
            &format!("/payment-methods/{method_id}"),
            Some(body),
            &[],
            policy,
        )
        .await
    }

    /// delete_payment_method
    ///
    /// DELETE /payment-methods/{id}.
    pub async fn delete_payment_method(&self, method_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::DELETE,
            &format!("/payment-methods/{method_id}"),
            None,
            FailurePolicy::detail("Failed to delete payment method"),
        )
        .await
    }

    /// set_default_payment_method
    ///
    /// PATCH /payment-methods/{id}/default.
    pub async fn set_default_payment_method(&self, method_id: &str) -> Result<(), ApiError> {
        self.execute(
            Method::PATCH,
            &format!("/payment-methods/{method_id}/default"),
            None,
            FailurePolicy::detail("Failed to set default payment method"),
        )
        .await
    }
}
