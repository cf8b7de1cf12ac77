//! Content-system document ids and display labels for people categories and
//! UCLA departments.

/// A content-system document id paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub id: &'static str,
    pub name: &'static str,
}

// ── People categories ───────────────────────────────────────────

pub mod people_categories {
    use super::Entry;

    pub const AFFILIATE: Entry = Entry {
        id: "cae812fd-2c96-437c-9c75-8b3a04307be5",
        name: "Affiliate",
    };
    pub const FACULTY: Entry = Entry {
        id: "c852a954-828d-4d81-8c1e-39299b23e5a7",
        name: "Faculty",
    };
    pub const GRAD_STUDENT: Entry = Entry {
        id: "226fe6c7-8fcf-4f83-a69c-6bd83c4a00fd",
        name: "Grad Student",
    };
    pub const SPEAKER: Entry = Entry {
        id: "928cfac5-6cbc-459c-85ea-e45add439ee1",
        name: "Speaker",
    };
    pub const STAFF: Entry = Entry {
        id: "c1521379-8de4-4b5d-9e0f-5765f2a4d62e",
        name: "Staff",
    };
}

// ── UCLA departments ────────────────────────────────────────────

/// (code, display name)
pub const UCLA_DEPARTMENTS: [(&str, &str); 6] = [
    ("art-history", "Art History"),
    ("alc", "Asian Languages & Cultures"),
    ("classics", "Classics"),
    ("cmrs", "Center for Medieval and Renaissance Studies"),
    ("history", "History"),
    ("nelc", "Near Eastern Languages and Cultures"),
];

pub fn department_name(code: &str) -> Option<&'static str> {
    UCLA_DEPARTMENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
