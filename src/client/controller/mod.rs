//! Synchronisation between the remote student collection and the dashboard view.
//!
//! Every mutating operation finishes by re-fetching the whole collection; the
//! controller keeps no local copy of the records. Failures are logged and folded
//! into a fixed notification per action, so callers never see an `ApiError`.

pub mod diff;
pub mod merge;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;

use crate::{
    client::model::{
        error::ApiError,
        form::{StudentForm, StudentInput},
        notification::Notice,
    },
    model::student::{CreateStudentDto, StudentDto},
};

pub use merge::MergeProposal;

/// REST operations on the student collection.
///
/// Futures are not required to be `Send`; the browser runs everything on one thread.
#[allow(async_fn_in_trait)]
pub trait StudentApi {
    async fn list(&self) -> Result<Vec<StudentDto>, ApiError>;
    async fn get(&self, id: i32) -> Result<StudentDto, ApiError>;
    async fn create(&self, payload: &CreateStudentDto) -> Result<(), ApiError>;
    async fn update(&self, payload: &StudentDto) -> Result<(), ApiError>;
    async fn delete(&self, id: i32) -> Result<(), ApiError>;
}

/// Proof that the user confirmed a deletion. Only obtainable through
/// [`StudentListController::request_delete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    id: i32,
}

impl DeleteConfirmation {
    pub fn id(&self) -> i32 {
        self.id
    }
}

/// Result of a finished action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionReport {
    /// Notices to display, in the order they were raised.
    pub notices: Vec<Notice>,
    /// Fresh collection, present when the post-mutation reload succeeded.
    pub students: Option<Vec<StudentDto>>,
    /// Whether the mutation itself went through. The form closes only on success.
    pub completed: bool,
}

impl ActionReport {
    fn failed(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            students: None,
            completed: false,
        }
    }
}

/// Outcome of submitting the add/edit form.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Finished(ActionReport),
    /// A record with the same (name, subject) exists; the user must confirm the merge.
    ConfirmMerge(MergeProposal),
}

pub struct StudentListController<A> {
    api: A,
}

impl<A: StudentApi> StudentListController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load_all(&self) -> Result<Vec<StudentDto>, Notice> {
        self.api.list().await.map_err(|err| {
            tracing::error!("Failed to load students: {}", err);
            Notice::error("Error loading students")
        })
    }

    /// Fetches the current server copy of a record to prefill the edit form.
    pub async fn load_for_edit(&self, id: i32) -> Result<StudentForm, Notice> {
        match self.api.get(id).await {
            Ok(student) => Ok(StudentForm::from_student(&student)),
            Err(err) => {
                tracing::error!("Failed to load student {}: {}", id, err);
                Err(Notice::error("Error loading student details"))
            }
        }
    }

    pub async fn submit(&self, form: &StudentForm) -> Submission {
        let input = match form.parse() {
            Ok(input) => input,
            Err(err) => {
                return Submission::Finished(ActionReport::failed(Notice::error(err.to_string())))
            }
        };

        match input.id {
            Some(id) => Submission::Finished(self.update(id, &input).await),
            None => self.create_or_propose_merge(&input).await,
        }
    }

    async fn update(&self, id: i32, input: &StudentInput) -> ActionReport {
        let original = match self.api.get(id).await {
            Ok(original) => original,
            Err(err) => {
                tracing::error!("Failed to fetch student {} before update: {}", id, err);
                return ActionReport::failed(Notice::error(
                    "Error fetching original student data",
                ));
            }
        };

        let payload = StudentDto {
            id,
            name: input.name.clone(),
            subject: input.subject.clone(),
            marks: input.marks,
        };
        if let Err(err) = self.api.update(&payload).await {
            tracing::error!("Failed to update student {}: {}", id, err);
            return ActionReport::failed(Notice::error("Error updating student"));
        }

        tracing::info!("Updated student {}", id);
        let changes = diff::describe_changes(&original, input);
        self.reload_after(Notice::success(diff::update_message(&changes)))
            .await
    }

    async fn create_or_propose_merge(&self, input: &StudentInput) -> Submission {
        let students = match self.api.list().await {
            Ok(students) => students,
            Err(err) => {
                tracing::error!("Failed to fetch students for duplicate check: {}", err);
                return Submission::Finished(ActionReport::failed(Notice::error(
                    "Error checking for duplicates",
                )));
            }
        };

        if let Some(existing) = merge::find_duplicate(&students, input) {
            return match MergeProposal::new(existing.clone(), input.marks) {
                Ok(proposal) => Submission::ConfirmMerge(proposal),
                Err(err) => {
                    Submission::Finished(ActionReport::failed(Notice::error(err.to_string())))
                }
            };
        }

        let payload = CreateStudentDto {
            name: input.name.clone(),
            subject: input.subject.clone(),
            marks: input.marks,
        };
        if let Err(err) = self.api.create(&payload).await {
            tracing::error!("Failed to create student: {}", err);
            return Submission::Finished(ActionReport::failed(Notice::error(
                "Error adding student",
            )));
        }

        tracing::info!("Created student {} ({})", payload.name, payload.subject);
        Submission::Finished(
            self.reload_after(Notice::success("Student added successfully"))
                .await,
        )
    }

    pub async fn confirm_merge(&self, proposal: MergeProposal) -> ActionReport {
        let merged = proposal.merged_record();
        if let Err(err) = self.api.update(&merged).await {
            tracing::error!("Failed to merge marks into student {}: {}", merged.id, err);
            return ActionReport::failed(Notice::error("Error updating student marks"));
        }

        tracing::info!("Merged marks into student {}", merged.id);
        self.reload_after(Notice::success(proposal.success_message()))
            .await
    }

    pub fn request_delete(&self, id: i32) -> DeleteConfirmation {
        DeleteConfirmation { id }
    }

    pub async fn confirm_delete(&self, confirmation: DeleteConfirmation) -> ActionReport {
        let id = confirmation.id();
        if let Err(err) = self.api.delete(id).await {
            tracing::error!("Failed to delete student {}: {}", id, err);
            return ActionReport::failed(Notice::error("Error deleting student"));
        }

        tracing::info!("Deleted student {}", id);
        self.reload_after(Notice::success("Student deleted successfully"))
            .await
    }

    async fn reload_after(&self, success: Notice) -> ActionReport {
        let mut notices = vec![success];
        let students = match self.load_all().await {
            Ok(students) => Some(students),
            Err(notice) => {
                notices.push(notice);
                None
            }
        };

        ActionReport {
            notices,
            students,
            completed: true,
        }
    }
}
