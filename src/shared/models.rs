/**
 * Shop Data Model
 *
 * Wire types exchanged with the recommendation backend: products, user
 * profiles with their purchase history, demo identities, and the request and
 * response bodies of the auth and recommendation endpoints.
 */
use serde::{Deserialize, Serialize};

/// Product identifier as issued by the backend
pub type ProductId = u64;

/// User identifier as issued by the backend
pub type UserId = u64;

/// A catalog entry. Immutable once loaded; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// One entry of a user's purchase history, in storage order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub product_id: ProductId,
    pub purchase_date: String,
}

/// The authenticated identity returned by `GET /api/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub purchase_history: Vec<PurchaseRecord>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub last_viewed_product_id: Option<ProductId>,
}

fn default_active() -> bool {
    true
}

/// A pre-seeded, password-less identity offered by the demo selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoUser {
    pub id: UserId,
    pub name: String,
}

/// Body of both recommendation endpoints.
///
/// The backend answers with any combination of `recommendations`, an
/// informational `message`, or an `error` (unknown demo identity).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Product>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Form-encoded body of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// The account email; the backend calls this field `username`
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// JSON body of `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Success body of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Failure body of the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
