use chrono::Utc;
use storefront_client::models::{
    Address, CartItem, CreateOrderRequest, DashboardData, LoginResponse, Notification,
    PaymentMethod, ProductFilters, UpdatePaymentMethodRequest, UpdateProfileRequest,
};
use storefront_client::session::Role;

// --- Tests ---

#[test]
fn test_notification_json_serialization() {
    // This tests the rename for the 'type' field
    let notification = Notification {
        id: "n1".to_string(),
        message: "Your order shipped".to_string(),
        notification_type: "order".to_string(), // Rust field name
        is_read: false,
        created_at: Utc::now(),
    };

    let json_output = serde_json::to_string(&notification).unwrap();

    // CRITICAL: Assert that the JSON key is "type", not "notification_type"
    assert!(
        json_output.contains(r#""type":"order""#),
        "JSON output must use 'type' key due to #[serde(rename = \"type\")]"
    );
    assert!(!json_output.contains("notification_type"));
    assert!(json_output.contains(r#""isRead":false"#));
}

#[test]
fn test_payment_method_json_serialization() {
    let method = PaymentMethod {
        id: "pm1".to_string(),
        method_type: "card".to_string(),
        brand: Some("visa".to_string()),
        last4: Some("4242".to_string()),
        expiry_month: Some("04".to_string()),
        expiry_year: Some("2030".to_string()),
        email: None,
        is_default: true,
    };

    let json_output = serde_json::to_string(&method).unwrap();

    assert!(json_output.contains(r#""type":"card""#));
    assert!(!json_output.contains("method_type"));
    assert!(json_output.contains(r#""expiryMonth":"04""#));
    assert!(json_output.contains(r#""isDefault":true"#));
}

#[test]
fn test_update_payment_method_request_optionality() {
    // This confirms the structure supports partial updates (all fields are Option<T>)
    let partial_update = UpdatePaymentMethodRequest {
        expiry_month: Some("05".to_string()),
        expiry_year: None,
        is_default: None,
    };

    let json_output = serde_json::to_string(&partial_update).unwrap();
    assert!(json_output.contains(r#""expiryMonth":"05""#));
    assert!(!json_output.contains("expiryYear")); // None fields are omitted
    assert!(!json_output.contains("isDefault"));
}

#[test]
fn test_update_profile_request_optionality() {
    let partial_update = UpdateProfileRequest {
        first_name: Some("Augusta".to_string()),
        ..Default::default()
    };

    let json_output = serde_json::to_string(&partial_update).unwrap();
    assert!(json_output.contains(r#""firstName":"Augusta""#));
    assert!(!json_output.contains("lastName"));
    assert!(!json_output.contains("currentPassword"));
    assert!(!json_output.contains("newPassword"));
}

#[test]
fn test_create_order_request_wire_shape() {
    let order = CreateOrderRequest {
        address_id: "a1".to_string(),
        payment_method_id: "pm1".to_string(),
        items: vec![CartItem {
            product_id: "p1".to_string(),
            quantity: 2,
        }],
    };

    let json_output = serde_json::to_string(&order).unwrap();
    assert!(json_output.contains(r#""addressId":"a1""#));
    assert!(json_output.contains(r#""paymentMethodId":"pm1""#));
    assert!(json_output.contains(r#""productId":"p1""#));
    assert!(!json_output.contains("address_id"));
}

#[test]
fn test_address_deserializes_from_camel_case() {
    let json_input = r#"{
        "id": "a1",
        "fullName": "Ada Lovelace",
        "line1": "1 Analytical Row",
        "line2": null,
        "city": "London",
        "postalCode": "N1 7AA",
        "country": "GB",
        "phone": null,
        "isDefault": true
    }"#;

    let address: Address = serde_json::from_str(json_input).unwrap();
    assert_eq!(address.full_name, "Ada Lovelace");
    assert_eq!(address.postal_code, "N1 7AA");
    assert!(address.is_default);
    assert_eq!(address.line2, None);
}

#[test]
fn test_auth_and_dashboard_responses_decode() {
    let login: LoginResponse = serde_json::from_str(
        r#"{
            "token": "jwt-abc",
            "user": {
                "id": "u1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "role": "admin"
            }
        }"#,
    )
    .unwrap();
    assert_eq!(login.token, "jwt-abc");
    assert_eq!(login.user.first_name, "Ada");

    let dashboard: DashboardData = serde_json::from_str(
        r#"{
            "totalOrders": 3,
            "wishlistItems": 2,
            "unreadNotifications": 1,
            "recentOrders": []
        }"#,
    )
    .unwrap();
    assert_eq!(dashboard.total_orders, 3);
    assert!(dashboard.recent_orders.is_empty());
}

#[test]
fn test_role_deserialization_is_closed() {
    let admin: Role = serde_json::from_str(r#""admin""#).unwrap();
    assert_eq!(admin, Role::Admin);

    let user: Role = serde_json::from_str(r#""user""#).unwrap();
    assert_eq!(user, Role::User);

    // Unknown role strings land on the catch-all instead of failing.
    let unknown: Role = serde_json::from_str(r#""moderator""#).unwrap();
    assert_eq!(unknown, Role::Unrecognized);

    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
}

#[test]
fn test_product_filters_query_pairs() {
    let filters = ProductFilters {
        category: Some("shoes".to_string()),
        sort_by: Some("price".to_string()),
        limit: Some(20),
        ..Default::default()
    };

    // CRITICAL: the sort field travels as snake_case `sort_by` on the wire.
    assert_eq!(
        filters.to_query(),
        vec![
            ("category".to_string(), "shoes".to_string()),
            ("sort_by".to_string(), "price".to_string()),
            ("limit".to_string(), "20".to_string()),
        ]
    );

    assert!(ProductFilters::default().to_query().is_empty());
}
