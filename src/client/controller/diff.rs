use crate::{client::model::form::StudentInput, model::student::StudentDto};

/// Human-readable list of fields that differ between the stored record and the
/// submitted values, in name, subject, marks order. Comparison is case-sensitive.
pub fn describe_changes(original: &StudentDto, updated: &StudentInput) -> Vec<String> {
    let mut changes = Vec::new();

    if original.name != updated.name {
        changes.push(format!(
            "name from \"{}\" to \"{}\"",
            original.name, updated.name
        ));
    }
    if original.subject != updated.subject {
        changes.push(format!(
            "subject from \"{}\" to \"{}\"",
            original.subject, updated.subject
        ));
    }
    if original.marks != updated.marks {
        changes.push(format!(
            "marks from {} to {}",
            original.marks, updated.marks
        ));
    }

    changes
}

pub fn update_message(changes: &[String]) -> String {
    if changes.is_empty() {
        "No changes made to student record".to_string()
    } else {
        format!("Updated student's {}", changes.join(", "))
    }
}
