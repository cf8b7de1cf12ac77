//! schema.org shapes emitted as JSON-LD.
//!
//! Only the subset of the `Event` and `EducationalOrganization` vocabularies
//! the site actually renders is modelled. Optional fields are skipped when
//! absent so the serialized object never carries `null`.

use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const EVENT_SCHEDULED: &str = "https://schema.org/EventScheduled";

// ── Shared nodes ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    #[serde(
        rename = "parentOrganization",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<Box<OrganizationRef>>,
}

// ── Event ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventPlace {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub event_status: String,
    pub location: EventPlace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub organizer: OrganizationRef,
}

// ── Organization ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: String,
    pub contact_type: String,
    pub email: String,
    pub telephone: String,
    pub available_language: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(rename = "@type")]
    pub kind: String,
    pub day_of_week: Vec<String>,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub email: String,
    pub address: PostalAddress,
    pub contact_point: ContactPoint,
    pub knows_language: Vec<String>,
    pub opening_hours_specification: Vec<OpeningHours>,
    pub parent_organization: OrganizationRef,
}

// ── Union ───────────────────────────────────────────────────────

/// Any JSON-LD document this worker produces.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StructuredData {
    Event(EventSchema),
    Organization(OrganizationSchema),
}

impl From<EventSchema> for StructuredData {
    fn from(schema: EventSchema) -> Self {
        Self::Event(schema)
    }
}

impl From<OrganizationSchema> for StructuredData {
    fn from(schema: OrganizationSchema) -> Self {
        Self::Organization(schema)
    }
}
