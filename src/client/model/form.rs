use crate::{client::model::error::FormError, model::student::StudentDto};

/// Raw values of the add/edit modal, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentForm {
    /// Present when editing an existing record.
    pub id: Option<i32>,
    pub name: String,
    pub subject: String,
    pub marks: String,
}

/// Trimmed and parsed form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentInput {
    pub id: Option<i32>,
    pub name: String,
    pub subject: String,
    pub marks: i32,
}

impl StudentForm {
    /// Prefills the form for editing an existing record.
    pub fn from_student(student: &StudentDto) -> Self {
        Self {
            id: Some(student.id),
            name: student.name.clone(),
            subject: student.subject.clone(),
            marks: student.marks.to_string(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn parse(&self) -> Result<StudentInput, FormError> {
        let marks = self.marks.trim();
        let marks = marks
            .parse::<i32>()
            .map_err(|_| FormError::InvalidMarks(marks.to_string()))?;

        Ok(StudentInput {
            id: self.id,
            name: self.name.trim().to_string(),
            subject: self.subject.trim().to_string(),
            marks,
        })
    }
}
