use crate::{
    client::model::{error::FormError, form::StudentInput},
    model::student::StudentDto,
};

/// Pending merge of new marks into an existing record with the same (name, subject).
///
/// Produced by the duplicate check and consumed by
/// [`StudentListController::confirm_merge`](super::StudentListController::confirm_merge).
/// Dropping it cancels the merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeProposal {
    pub existing: StudentDto,
    pub added_marks: i32,
    pub total_marks: i32,
}

impl MergeProposal {
    pub fn new(existing: StudentDto, added_marks: i32) -> Result<Self, FormError> {
        let total_marks = existing
            .marks
            .checked_add(added_marks)
            .ok_or(FormError::MarksOverflow)?;

        Ok(Self {
            existing,
            added_marks,
            total_marks,
        })
    }

    /// Record sent with the PUT: existing id, name and subject with the summed marks.
    pub fn merged_record(&self) -> StudentDto {
        StudentDto {
            marks: self.total_marks,
            ..self.existing.clone()
        }
    }

    pub fn success_message(&self) -> String {
        format!(
            "Updated {}'s marks to {} in {}",
            self.existing.name, self.total_marks, self.existing.subject
        )
    }
}

/// First record in scan order whose (name, subject) matches the input case-insensitively.
pub fn find_duplicate<'a>(
    students: &'a [StudentDto],
    input: &StudentInput,
) -> Option<&'a StudentDto> {
    students
        .iter()
        .find(|s| s.matches_key(&input.name, &input.subject))
}
