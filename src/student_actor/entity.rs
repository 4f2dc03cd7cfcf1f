use crate::model::{Student, StudentCreate, StudentDocId, StudentFilter, StudentUpdate};
use crate::student_actor::StudentError;
use async_trait::async_trait;
use docstore::Document;

#[async_trait]
impl Document for Student {
    type Id = StudentDocId;
    type Create = StudentCreate;
    type Update = StudentUpdate;
    type Filter = StudentFilter;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = StudentError;

    const COLLECTION: &'static str = "students";

    fn from_create_params(id: StudentDocId, params: StudentCreate) -> Result<Self, StudentError> {
        Ok(Self {
            id,
            student_id: params.student_id,
            full_name: params.full_name,
        })
    }

    fn matches(&self, filter: &StudentFilter) -> bool {
        match filter {
            StudentFilter::StudentId(id) => &self.student_id == id,
        }
    }

    async fn on_update(&mut self, update: StudentUpdate, _ctx: &()) -> Result<(), StudentError> {
        if let Some(student_id) = update.student_id {
            self.student_id = student_id;
        }
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), StudentError> {
        Ok(())
    }
}
