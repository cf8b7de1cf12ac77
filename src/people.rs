use crate::dicts::{department_name, people_categories};
use crate::models::{AffiliationType, PersonRecord};

const GRAD_STUDENT_LABEL: &str = "Graduate Student";

/// Pick the single role to display next to a person's name.
///
/// Precedence, first match wins:
/// 1. internal people with roles: the title held in `home_workspace`
/// 2. faculty title
/// 3. institution
/// 4. "Graduate Student", with the department appended when known
///
/// An internal person whose roles are all in other workspaces gets no role
/// at all; they do not fall through to the faculty title or institution.
/// With no home workspace configured no internal role can match.
pub fn resolve_role(person: &PersonRecord, home_workspace: Option<&str>) -> Option<String> {
    if person.affiliation_type == AffiliationType::Internal && !person.internal_roles.is_empty() {
        let home = home_workspace?;
        return person
            .internal_roles
            .iter()
            .find(|r| r.organization.id == home)
            .and_then(|r| r.title.clone());
    }

    if let Some(title) = present(&person.faculty_title) {
        return Some(title.to_string());
    }
    if let Some(institution) = present(&person.institution) {
        return Some(institution.to_string());
    }

    if is_grad_student(person) {
        let mut role = GRAD_STUDENT_LABEL.to_string();
        if let Some(dept) = present(&person.department).and_then(department_name) {
            role.push_str(", ");
            role.push_str(dept);
        }
        return Some(role);
    }

    None
}

fn is_grad_student(person: &PersonRecord) -> bool {
    person
        .categories
        .iter()
        .flatten()
        .any(|c| c.id == people_categories::GRAD_STUDENT.id)
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
