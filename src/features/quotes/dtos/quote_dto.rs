use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::quotes::models::{QuoteStatus, QuoteType};
use crate::shared::validation::{MOBILE_REGEX, PHONE_REGEX};

/// Customer submission form. Unauthenticated; the password gates later
/// lookup of the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    #[serde(rename = "type")]
    pub request_type: QuoteType,

    #[validate(range(min = 1, message = "A category must be selected"))]
    pub category_id: i64,

    #[validate(range(min = 1, message = "A product must be selected"))]
    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number format"))]
    pub mobile: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    #[validate(length(min = 4, max = 20, message = "Password must be 4-20 characters"))]
    pub password: String,

    #[serde(default)]
    pub status: QuoteStatus,
}

/// Staff-side edit of a quote request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteRequest {
    pub status: QuoteStatus,

    #[serde(rename = "type")]
    pub request_type: QuoteType,

    #[validate(length(max = 2000, message = "Response must be at most 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
}

/// Customer lookup of their own request by mobile number and password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuoteRequest {
    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number format"))]
    pub mobile: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
