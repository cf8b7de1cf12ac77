use serde::{Deserialize, Serialize};

// ── Shared references ───────────────────────────────────────────

/// A dereferenced document reference. The content API projects referenced
/// documents inline, so only `_id` is relied on here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRef {
    #[serde(rename = "_id")]
    pub id: String,
}

// ── People ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AffiliationType {
    Internal,
    External,
}

/// A title held by a person within a given workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InternalRole {
    pub organization: DocumentRef,
    pub title: Option<String>,
}

/// A person document as delivered by the content layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub affiliation_type: AffiliationType,
    #[serde(default)]
    pub internal_roles: Vec<InternalRole>,
    pub faculty_title: Option<String>,
    pub institution: Option<String>,
    /// Dangling references come back as `null` entries.
    #[serde(default)]
    pub categories: Vec<Option<DocumentRef>>,
    pub department: Option<String>,
}

// ── Images ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Focal area chosen by the editor, in fractions of the source image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Edge insets chosen by the editor, in fractions of the source image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImageCrop {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    pub asset: AssetRef,
    pub hotspot: Option<Hotspot>,
    pub crop: Option<ImageCrop>,
}

// ── Events ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLocation {
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub location: PlaceLocation,
}

/// Calendar details. Dates are `YYYY-MM-DD`, times are `HH:MM` local time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub start_date: String,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub multi_day: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub text: Option<String>,
}

/// A portable-text block; only its spans are read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    #[serde(default)]
    pub children: Vec<Span>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub title: String,
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub place: Vec<Place>,
    pub details: EventDetails,
    pub preview: Option<Vec<Block>>,
}

// ── Site settings ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Global site settings, loaded once by the caller and passed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_domain: Option<String>,
    pub site_name: Option<String>,
    #[serde(default)]
    pub seo: Seo,
}
