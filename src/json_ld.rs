//! JSON-LD builders for event pages and the site-wide organization block.

use std::fmt;

use crate::images::{CropMode, Fit, ImageSource};
use crate::models::{
    ContactPoint, EventPlace, EventRecord, EventSchema, OpeningHours, OrganizationRef,
    OrganizationSchema, PostalAddress, SiteSettings, EVENT_SCHEDULED, SCHEMA_CONTEXT,
};

const ORGANIZER_NAME: &str = "UCLA Pourdavoud Institute";
const ORGANIZER_URL: &str = "https://pourdavoud.ucla.edu";

/// (width, height) of each image variant, in the order search engines
/// should prefer them: 4:3 then 16:9.
const EVENT_IMAGE_SIZES: [(u32, u32); 2] = [(1200, 900), (1200, 675)];

// ── Errors ──────────────────────────────────────────────────────

/// The event has no place to build a `location` from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLocationError {
    pub event: String,
}

impl fmt::Display for MissingLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event \"{}\" has no place", self.event)
    }
}

impl std::error::Error for MissingLocationError {}

// ── Event ───────────────────────────────────────────────────────

pub fn event_structured_data(
    event: &EventRecord,
    images: &ImageSource,
) -> Result<EventSchema, MissingLocationError> {
    let place = event.place.first().ok_or_else(|| MissingLocationError {
        event: event.title.clone(),
    })?;
    let loc = &place.location;

    let image = event.image.as_ref().and_then(|img| {
        let base = images
            .image(img)
            .auto_format()
            .fit(Fit::Crop)
            .crop(CropMode::FocalPoint);
        EVENT_IMAGE_SIZES
            .iter()
            .map(|&(w, h)| base.clone().width(w).height(h).url())
            .collect::<Option<Vec<_>>>()
    });

    let description = event
        .preview
        .as_ref()
        .and_then(|blocks| blocks.first())
        .and_then(|block| block.children.first())
        .and_then(|span| span.text.clone());

    let (start_date, end_date) = event_dates(event);

    Ok(EventSchema {
        context: SCHEMA_CONTEXT.into(),
        kind: "Event".into(),
        name: event.title.clone(),
        start_date,
        end_date,
        event_status: EVENT_SCHEDULED.into(),
        location: EventPlace {
            kind: "Place".into(),
            name: place.name.clone(),
            address: PostalAddress {
                kind: "PostalAddress".into(),
                extended_address: Some(loc.extended_address.clone().unwrap_or_default()),
                street_address: loc.street_address.clone(),
                address_locality: loc.address_locality.clone(),
                address_region: loc.address_region.clone(),
                postal_code: loc.postal_code.clone(),
                address_country: loc.address_country.clone(),
            },
        },
        image,
        description,
        organizer: OrganizationRef {
            kind: "Organization".into(),
            name: ORGANIZER_NAME.into(),
            url: ORGANIZER_URL.into(),
            parent: None,
        },
    })
}

/// Compose `(startDate, endDate)`.
///
/// Times are local with no UTC offset; the consumer localizes them.
/// Multi-day events show calendar dates only, so they discard any times.
fn event_dates(event: &EventRecord) -> (String, Option<String>) {
    let d = &event.details;

    if d.multi_day {
        return (d.start_date.clone(), d.end_date.clone());
    }

    let start = match present(&d.start_time) {
        Some(t) => format!("{}T{t}:00", d.start_date),
        None => d.start_date.clone(),
    };
    let end = match present(&d.end_time) {
        Some(t) => format!("{}T{t}:00", d.start_date),
        None => d.start_date.clone(),
    };
    (start, Some(end))
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

// ── Organization ────────────────────────────────────────────────

pub fn organization_structured_data(settings: &SiteSettings) -> OrganizationSchema {
    OrganizationSchema {
        context: SCHEMA_CONTEXT.into(),
        kind: "EducationalOrganization".into(),
        url: present(&settings.site_domain).map(site_origin),
        name: settings.site_name.clone(),
        alternate_name: settings.seo.title.clone(),
        description: settings.seo.description.clone(),
        email: "pourdavoud@humnet.ucla.edu".into(),
        address: PostalAddress {
            kind: "PostalAddress".into(),
            extended_address: Some("6265 Bunche Hall".into()),
            street_address: Some("315 Portola Plaza".into()),
            address_locality: Some("Los Angeles".into()),
            address_region: Some("CA".into()),
            postal_code: Some("90095".into()),
            address_country: Some("US".into()),
        },
        contact_point: ContactPoint {
            kind: "ContactPoint".into(),
            contact_type: "general inquiries".into(),
            email: "pourdavoud@humnet.ucla.edu".into(),
            telephone: "+1-310-825-1000".into(),
            available_language: vec!["English".into(), "Persian".into()],
        },
        knows_language: vec!["en".into(), "fa".into()],
        opening_hours_specification: vec![OpeningHours {
            kind: "OpeningHoursSpecification".into(),
            day_of_week: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            opens: "09:00".into(),
            closes: "17:00".into(),
        }],
        parent_organization: OrganizationRef {
            kind: "EducationalOrganization".into(),
            name: "UCLA Division of Humanities".into(),
            url: "https://humanities.ucla.edu".into(),
            parent: Some(Box::new(OrganizationRef {
                kind: "CollegeOrUniversity".into(),
                name: "University of California, Los Angeles".into(),
                url: "https://www.ucla.edu".into(),
                parent: None,
            })),
        },
    }
}

/// `pourdavoud.ucla.edu` -> `https://pourdavoud.ucla.edu`; full URLs pass
/// through without a trailing slash.
fn site_origin(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AssetRef, Block, EventDetails, ImageRef, Place, PlaceLocation, Seo, Span, StructuredData,
    };
    use serde_json::json;

    fn images() -> ImageSource {
        ImageSource::new("proj", "production")
    }

    fn event(details: EventDetails) -> EventRecord {
        EventRecord {
            title: "Nowruz Lecture".into(),
            image: None,
            place: vec![Place {
                name: "Royce Hall".into(),
                location: PlaceLocation {
                    street_address: Some("10745 Dickson Ct".into()),
                    extended_address: None,
                    address_locality: Some("Los Angeles".into()),
                    address_region: Some("CA".into()),
                    postal_code: Some("90095".into()),
                    address_country: None,
                },
            }],
            details,
            preview: None,
        }
    }

    fn day(start: &str) -> EventDetails {
        EventDetails {
            start_date: start.into(),
            ..Default::default()
        }
    }

    // ── date composition ───────────────────────────────────────

    #[test]
    fn single_day_with_times() {
        let mut d = day("2024-05-01");
        d.start_time = Some("10:00".into());
        d.end_time = Some("12:00".into());
        let schema = event_structured_data(&event(d), &images()).unwrap();
        assert_eq!(schema.start_date, "2024-05-01T10:00:00");
        assert_eq!(schema.end_date.as_deref(), Some("2024-05-01T12:00:00"));
    }

    #[test]
    fn multi_day_discards_times() {
        let d = EventDetails {
            start_date: "2024-05-01".into(),
            end_date: Some("2024-05-03".into()),
            start_time: Some("10:00".into()),
            end_time: None,
            multi_day: true,
        };
        let schema = event_structured_data(&event(d), &images()).unwrap();
        assert_eq!(schema.start_date, "2024-05-01");
        assert_eq!(schema.end_date.as_deref(), Some("2024-05-03"));
    }

    #[test]
    fn start_time_only_leaves_end_as_bare_date() {
        let mut d = day("2024-05-01");
        d.start_time = Some("18:30".into());
        let schema = event_structured_data(&event(d), &images()).unwrap();
        assert_eq!(schema.start_date, "2024-05-01T18:30:00");
        assert_eq!(schema.end_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn end_time_uses_start_date() {
        let mut d = day("2024-05-01");
        d.end_date = Some("2024-05-09".into());
        d.end_time = Some("20:00".into());
        let schema = event_structured_data(&event(d), &images()).unwrap();
        assert_eq!(schema.start_date, "2024-05-01");
        assert_eq!(schema.end_date.as_deref(), Some("2024-05-01T20:00:00"));
    }

    #[test]
    fn no_times_mirrors_start_date() {
        let schema = event_structured_data(&event(day("2024-05-01")), &images()).unwrap();
        assert_eq!(schema.start_date, "2024-05-01");
        assert_eq!(schema.end_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn multi_day_without_end_date_omits_end() {
        let mut d = day("2024-05-01");
        d.multi_day = true;
        let schema = event_structured_data(&event(d), &images()).unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["startDate"], "2024-05-01");
        assert!(value.get("endDate").is_none());
    }

    // ── location ───────────────────────────────────────────────

    #[test]
    fn empty_place_is_missing_location() {
        let mut e = event(day("2024-05-01"));
        e.place.clear();
        let err = event_structured_data(&e, &images()).unwrap_err();
        assert_eq!(
            err,
            MissingLocationError {
                event: "Nowruz Lecture".into()
            }
        );
        assert_eq!(err.to_string(), "event \"Nowruz Lecture\" has no place");
    }

    #[test]
    fn only_first_place_is_used() {
        let mut e = event(day("2024-05-01"));
        e.place.push(Place {
            name: "Online".into(),
            location: PlaceLocation::default(),
        });
        let schema = event_structured_data(&e, &images()).unwrap();
        assert_eq!(schema.location.name, "Royce Hall");
    }

    #[test]
    fn address_defaults_extended_and_omits_missing_fields() {
        let schema = event_structured_data(&event(day("2024-05-01")), &images()).unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value["location"],
            json!({
                "@type": "Place",
                "name": "Royce Hall",
                "address": {
                    "@type": "PostalAddress",
                    "extendedAddress": "",
                    "streetAddress": "10745 Dickson Ct",
                    "addressLocality": "Los Angeles",
                    "addressRegion": "CA",
                    "postalCode": "90095"
                }
            })
        );
    }

    // ── enrichment ─────────────────────────────────────────────

    #[test]
    fn fixed_fields_and_no_optional_keys() {
        let schema = event_structured_data(&event(day("2024-05-01")), &images()).unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Event");
        assert_eq!(value["name"], "Nowruz Lecture");
        assert_eq!(value["eventStatus"], "https://schema.org/EventScheduled");
        assert_eq!(
            value["organizer"],
            json!({
                "@type": "Organization",
                "name": "UCLA Pourdavoud Institute",
                "url": "https://pourdavoud.ucla.edu"
            })
        );
        assert!(value.get("image").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn image_set_is_four_by_three_then_sixteen_by_nine() {
        let mut e = event(day("2024-05-01"));
        e.image = Some(ImageRef {
            asset: AssetRef {
                reference: "image-abc-3000x2000-jpg".into(),
            },
            hotspot: None,
            crop: None,
        });
        let schema = event_structured_data(&e, &images()).unwrap();
        let base = "https://cdn.sanity.io/images/proj/production/abc-3000x2000.jpg";
        assert_eq!(
            schema.image,
            Some(vec![
                format!("{base}?w=1200&h=900&fit=crop&crop=focalpoint&auto=format"),
                format!("{base}?w=1200&h=675&fit=crop&crop=focalpoint&auto=format"),
            ])
        );
    }

    #[test]
    fn unresolvable_image_is_omitted() {
        let mut e = event(day("2024-05-01"));
        e.image = Some(ImageRef {
            asset: AssetRef {
                reference: "garbage".into(),
            },
            hotspot: None,
            crop: None,
        });
        let schema = event_structured_data(&e, &images()).unwrap();
        assert!(schema.image.is_none());
    }

    #[test]
    fn description_from_first_span_of_first_block() {
        let mut e = event(day("2024-05-01"));
        e.preview = Some(vec![
            Block {
                children: vec![
                    Span {
                        text: Some("A talk on the Shahnameh.".into()),
                    },
                    Span {
                        text: Some(" Reception to follow.".into()),
                    },
                ],
            },
            Block {
                children: vec![Span {
                    text: Some("Second paragraph".into()),
                }],
            },
        ]);
        let schema = event_structured_data(&e, &images()).unwrap();
        assert_eq!(
            schema.description.as_deref(),
            Some("A talk on the Shahnameh.")
        );
    }

    #[test]
    fn description_omitted_when_first_span_has_no_text() {
        let mut e = event(day("2024-05-01"));
        e.preview = Some(vec![Block {
            children: vec![
                Span { text: None },
                Span {
                    text: Some("later span".into()),
                },
            ],
        }]);
        let schema = event_structured_data(&e, &images()).unwrap();
        assert!(schema.description.is_none());
        let value = serde_json::to_value(&schema).unwrap();
        assert!(value.get("description").is_none());
    }

    #[test]
    fn description_omitted_for_empty_preview_or_children() {
        let mut e = event(day("2024-05-01"));
        e.preview = Some(vec![]);
        assert!(event_structured_data(&e, &images())
            .unwrap()
            .description
            .is_none());

        e.preview = Some(vec![Block { children: vec![] }]);
        assert!(event_structured_data(&e, &images())
            .unwrap()
            .description
            .is_none());
    }

    // ── organization ───────────────────────────────────────────

    fn settings() -> SiteSettings {
        SiteSettings {
            site_domain: Some("pourdavoud.ucla.edu".into()),
            site_name: Some("Pourdavoud Institute".into()),
            seo: Seo {
                title: Some("Pourdavoud Institute for the Study of the Iranian World".into()),
                description: Some("Research and programs on the Iranian world.".into()),
            },
        }
    }

    #[test]
    fn organization_substitutes_settings() {
        let schema = organization_structured_data(&settings());
        assert_eq!(schema.url.as_deref(), Some("https://pourdavoud.ucla.edu"));
        assert_eq!(schema.name.as_deref(), Some("Pourdavoud Institute"));
        assert_eq!(
            schema.alternate_name.as_deref(),
            Some("Pourdavoud Institute for the Study of the Iranian World")
        );
        assert_eq!(
            schema.description.as_deref(),
            Some("Research and programs on the Iranian world.")
        );
    }

    #[test]
    fn organization_omits_absent_settings() {
        let value = serde_json::to_value(organization_structured_data(&SiteSettings::default()))
            .unwrap();
        for key in ["url", "name", "alternateName", "description"] {
            assert!(value.get(key).is_none(), "{key} should be omitted");
        }
        assert_eq!(value["@type"], "EducationalOrganization");
        assert_eq!(value["address"]["addressLocality"], "Los Angeles");
    }

    #[test]
    fn organization_parent_chain_is_two_levels() {
        let value = serde_json::to_value(organization_structured_data(&settings())).unwrap();
        let parent = &value["parentOrganization"];
        assert_eq!(parent["name"], "UCLA Division of Humanities");
        assert_eq!(
            parent["parentOrganization"]["name"],
            "University of California, Los Angeles"
        );
        assert!(parent["parentOrganization"]
            .get("parentOrganization")
            .is_none());
    }

    #[test]
    fn site_origin_normalizes() {
        assert_eq!(site_origin("pourdavoud.ucla.edu"), "https://pourdavoud.ucla.edu");
        assert_eq!(
            site_origin("https://pourdavoud.ucla.edu/"),
            "https://pourdavoud.ucla.edu"
        );
        assert_eq!(site_origin("http://localhost:4321"), "http://localhost:4321");
    }

    #[test]
    fn structured_data_union_serializes_inner_shape() {
        let org = organization_structured_data(&settings());
        let data = StructuredData::from(org.clone());
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            serde_json::to_value(&org).unwrap()
        );
    }
}
