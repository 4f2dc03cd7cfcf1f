use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier of a student document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentDocId(pub u32);

impl From<u32> for StudentDocId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for StudentDocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "student_{}", self.0)
    }
}

/// The school's own student number (e.g. `S001`). Orders refer to students by this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered student.
///
/// # Document Store
/// Kept in the `students` collection. `student_id` is unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentDocId,
    pub student_id: StudentId,
    pub full_name: String,
}

/// Raw student form input.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub student_id: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentCreate {
    pub student_id: StudentId,
    pub full_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub student_id: Option<StudentId>,
    pub full_name: Option<String>,
}

impl From<StudentCreate> for StudentUpdate {
    fn from(form: StudentCreate) -> Self {
        Self {
            student_id: Some(form.student_id),
            full_name: Some(form.full_name),
        }
    }
}

#[derive(Debug, Clone)]
pub enum StudentFilter {
    StudentId(StudentId),
}
