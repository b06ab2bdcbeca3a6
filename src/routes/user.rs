use super::{GuardKind, RouteId, RouteTable};

/// User Route Tree
///
/// The full shopping surface for a signed-in user. The host wraps the tree
/// in [`super::UserGuard`] before rendering; the table itself only decides
/// which page a path names.
///
/// Literal segments are listed ahead of parameterized ones where the two
/// could collide (`/addresses/new` vs `/addresses/:addressId/edit`).
pub fn user_routes() -> RouteTable {
    RouteTable {
        guard: Some(GuardKind::User),
        // The index path goes straight to the catalog.
        index: Some(("/", "/products")),
        entries: &[
            // /products
            // Catalog listing, also the fallback target for this tree.
            ("/products", RouteId::Products),
            // /products/:productId
            // Single product view.
            ("/products/:productId", RouteId::ProductDetails),
            // /dashboard
            // Account overview: counters plus recent orders.
            ("/dashboard", RouteId::Dashboard),
            // /wishlist
            ("/wishlist", RouteId::Wishlist),
            // /orders
            // Order history.
            ("/orders", RouteId::Orders),
            // /orders/:orderId
            // Single order view.
            ("/orders/:orderId", RouteId::OrderDetails),
            // /addresses
            // Saved shipping addresses.
            ("/addresses", RouteId::Addresses),
            // /addresses/new
            ("/addresses/new", RouteId::AddressNew),
            // /addresses/:addressId/edit
            ("/addresses/:addressId/edit", RouteId::AddressEdit),
            // /payment-methods
            // Stored cards and PayPal accounts.
            ("/payment-methods", RouteId::PaymentMethods),
            // /payment-methods/new-card
            ("/payment-methods/new-card", RouteId::PaymentNewCard),
            // /payment-methods/new-paypal
            ("/payment-methods/new-paypal", RouteId::PaymentNewPaypal),
            // /checkout
            ("/checkout", RouteId::Checkout),
            // /profile
            // The user's own account settings.
            ("/profile", RouteId::Profile),
            // /legal/privacy, /legal/terms, /legal/contact
            // Static legal pages, only reachable signed in.
            ("/legal/privacy", RouteId::LegalPrivacy),
            ("/legal/terms", RouteId::LegalTerms),
            ("/legal/contact", RouteId::LegalContact),
        ],
        fallback: "/products",
    }
}
