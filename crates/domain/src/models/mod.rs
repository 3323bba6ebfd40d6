//! Domain models for Student Manager.

pub mod student;

pub use student::{CreateStudentRequest, Student, StudentDto, UpdateStudentRequest};
