use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a quote request.
///
/// New requests start at `Pending`; staff move them to `Processing` while
/// working on an estimate and close them out as `Completed` or `Rejected`.
/// The graph is advisory only: admins may set any of the four values
/// directly and the client never blocks a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl QuoteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Processing => "Processing",
            QuoteStatus::Completed => "Completed",
            QuoteStatus::Rejected => "Rejected",
        }
    }
}

/// What the customer is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteType {
    #[default]
    Quote,
    Consultation,
}

/// Installation/quote request as the backend stores it.
///
/// Created unauthenticated and protected by the password field; status,
/// type and the admin response are mutated by admin actors only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: i64,
    #[serde(rename = "type")]
    pub request_type: QuoteType,
    #[serde(default)]
    pub status: QuoteStatus,
    pub product_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub mobile: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
