//! # Student Client
//!
//! Staff-facing API for the `students` collection. Student ids are unique; the check
//! runs before every add and edit.
use crate::model::{
    Session, Student, StudentDocId, StudentFilter, StudentForm, StudentId, StudentUpdate,
};
use crate::student_actor::StudentError;
use crate::validation::parse_student;
use async_trait::async_trait;
use docstore::{CollectionClient, CollectionHandle, StoreError};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct StudentClient {
    inner: CollectionClient<Student>,
}

impl StudentClient {
    pub fn new(inner: CollectionClient<Student>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, form), fields(student_id = %form.student_id))]
    pub async fn add_student(
        &self,
        session: &Session,
        form: &StudentForm,
    ) -> Result<StudentDocId, StudentError> {
        session.require_staff()?;
        let create = parse_student(form)?;
        self.ensure_id_free(&create.student_id, None).await?;

        debug!("Sending request");
        let id = self.inner.add(create).await?;
        info!(%id, "Student added");
        Ok(id)
    }

    #[instrument(skip(self, form), fields(student_id = %form.student_id))]
    pub async fn update_student(
        &self,
        session: &Session,
        id: StudentDocId,
        form: &StudentForm,
    ) -> Result<Student, StudentError> {
        session.require_staff()?;
        let create = parse_student(form)?;
        self.ensure_id_free(&create.student_id, Some(id)).await?;

        debug!("Sending request");
        Ok(self.inner.update(id, StudentUpdate::from(create)).await?)
    }

    /// Remove a student. Their orders remain and display as "Unknown Student".
    #[instrument(skip(self))]
    pub async fn delete_student(&self, session: &Session, id: StudentDocId) -> Result<(), StudentError> {
        session.require_staff()?;
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_student_id(&self, student_id: &StudentId) -> Result<Option<Student>, StudentError> {
        debug!("Sending request");
        let found = self
            .inner
            .find(StudentFilter::StudentId(student_id.clone()))
            .await?;
        Ok(found.into_iter().next())
    }

    async fn ensure_id_free(
        &self,
        student_id: &StudentId,
        editing: Option<StudentDocId>,
    ) -> Result<(), StudentError> {
        let taken = self
            .inner
            .find(StudentFilter::StudentId(student_id.clone()))
            .await?
            .iter()
            .any(|student| Some(student.id) != editing);
        if taken {
            return Err(StudentError::AlreadyExists(student_id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionHandle<Student> for StudentClient {
    type Error = StudentError;

    fn inner(&self) -> &CollectionClient<Student> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        StudentError::from(e)
    }
}
