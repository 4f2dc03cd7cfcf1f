//! Who is calling.
//!
//! Every operation that depends on the caller takes a [`Session`] argument instead of
//! reading a global "admin mode" flag.

use crate::model::StudentId;
use crate::reports::DashboardScope;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Cafeteria staff: manage menu, classes, students and order status.
    Staff,
    /// A student ordering for themselves.
    Student(StudentId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

/// Returned when a student session attempts a staff-only operation.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Staff access required")]
pub struct StaffOnly;

impl Session {
    pub fn staff() -> Self {
        Self { role: Role::Staff }
    }

    pub fn student(id: StudentId) -> Self {
        Self {
            role: Role::Student(id),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Staff)
    }

    pub fn require_staff(&self) -> Result<(), StaffOnly> {
        if self.is_staff() {
            Ok(())
        } else {
            Err(StaffOnly)
        }
    }

    /// The student this session belongs to, if any.
    pub fn student_id(&self) -> Option<&StudentId> {
        match &self.role {
            Role::Staff => None,
            Role::Student(id) => Some(id),
        }
    }

    /// Staff see everyone's figures; a student sees their own.
    pub fn default_scope(&self) -> DashboardScope {
        match &self.role {
            Role::Staff => DashboardScope::All,
            Role::Student(id) => DashboardScope::Student(id.clone()),
        }
    }
}
