pub mod helper;
pub mod student;

pub use student::HttpStudentApi;
