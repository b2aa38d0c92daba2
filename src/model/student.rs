use serde::{Deserialize, Serialize};

/// A student record as stored by the backend.
///
/// Also used as the `PUT /api/students` body, which replaces every field of the
/// record identified by `id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub subject: String,
    pub marks: i32,
}

impl StudentDto {
    /// Case-insensitive match on the (name, subject) pair used for duplicate detection.
    pub fn matches_key(&self, name: &str, subject: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.subject.to_lowercase() == subject.to_lowercase()
    }

    /// Upper-cased first character of the name, shown as the row avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateStudentDto {
    pub name: String,
    pub subject: String,
    pub marks: i32,
}
