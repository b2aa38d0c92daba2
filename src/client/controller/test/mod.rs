use std::cell::{Cell, RefCell};

use crate::{
    client::{
        controller::{ActionReport, StudentApi, StudentListController, Submission},
        model::{
            error::ApiError,
            form::StudentForm,
            notification::{Notice, NoticeKind},
        },
    },
    model::student::{CreateStudentDto, StudentDto},
};

mod submit_update;

/// Request issued against the mock backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Get(i32),
    Create(CreateStudentDto),
    Update(StudentDto),
    Delete(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory backend that records every request and can be told to fail
/// specific operations.
pub struct MockStudentApi {
    records: RefCell<Vec<StudentDto>>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<Vec<Op>>,
    next_id: Cell<i32>,
}

impl MockStudentApi {
    pub fn new() -> Self {
        Self::with_students(Vec::new())
    }

    pub fn with_students(records: Vec<StudentDto>) -> Self {
        let next_id = records.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self {
            records: RefCell::new(records),
            calls: RefCell::new(Vec::new()),
            failing: RefCell::new(Vec::new()),
            next_id: Cell::new(next_id),
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.borrow_mut().push(op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn records(&self) -> Vec<StudentDto> {
        self.records.borrow().clone()
    }

    /// Calls that change server state.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Update(_) | Call::Delete(_)))
            .collect()
    }

    fn record(&self, call: Call, op: Op) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&op) {
            Err(ApiError::new(500, "Internal Server Error"))
        } else {
            Ok(())
        }
    }

    fn not_found() -> ApiError {
        ApiError::new(404, "Student not found")
    }
}

impl StudentApi for &MockStudentApi {
    async fn list(&self) -> Result<Vec<StudentDto>, ApiError> {
        self.record(Call::List, Op::List)?;
        Ok(self.records())
    }

    async fn get(&self, id: i32) -> Result<StudentDto, ApiError> {
        self.record(Call::Get(id), Op::Get)?;
        self.records
            .borrow()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(MockStudentApi::not_found)
    }

    async fn create(&self, payload: &CreateStudentDto) -> Result<(), ApiError> {
        self.record(Call::Create(payload.clone()), Op::Create)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.records.borrow_mut().push(StudentDto {
            id,
            name: payload.name.clone(),
            subject: payload.subject.clone(),
            marks: payload.marks,
        });
        Ok(())
    }

    async fn update(&self, payload: &StudentDto) -> Result<(), ApiError> {
        self.record(Call::Update(payload.clone()), Op::Update)?;
        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|s| s.id == payload.id)
            .ok_or_else(MockStudentApi::not_found)?;
        *slot = payload.clone();
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.record(Call::Delete(id), Op::Delete)?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|s| s.id != id);
        if records.len() == before {
            return Err(MockStudentApi::not_found());
        }
        Ok(())
    }
}

pub fn student(id: i32, name: &str, subject: &str, marks: i32) -> StudentDto {
    StudentDto {
        id,
        name: name.to_string(),
        subject: subject.to_string(),
        marks,
    }
}

pub fn new_form(name: &str, subject: &str, marks: &str) -> StudentForm {
    StudentForm {
        id: None,
        name: name.to_string(),
        subject: subject.to_string(),
        marks: marks.to_string(),
    }
}

pub fn edit_form(id: i32, name: &str, subject: &str, marks: &str) -> StudentForm {
    StudentForm {
        id: Some(id),
        ..new_form(name, subject, marks)
    }
}

/// Unwraps a finished submission, failing the test on a merge prompt.
pub fn finished(submission: Submission) -> ActionReport {
    match submission {
        Submission::Finished(report) => report,
        Submission::ConfirmMerge(proposal) => {
            panic!("unexpected merge prompt for {:?}", proposal.existing)
        }
    }
}

pub fn messages(report: &ActionReport) -> Vec<&str> {
    report.notices.iter().map(|n| n.message.as_str()).collect()
}
