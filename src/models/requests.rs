use serde::{Deserialize, Serialize};

// ── API response types ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// Display role for a person; `null` when nothing applies.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RoleResponse {
    pub role: Option<String>,
}

/// Error envelope shared by every JSON error the worker returns.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ── Deploy webhook ──────────────────────────────────────────────

/// Delivery metadata the content system attaches to webhook calls.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliveryHeaders {
    pub webhook_id: Option<String>,
    pub transaction_time: Option<String>,
    pub project_id: Option<String>,
}
