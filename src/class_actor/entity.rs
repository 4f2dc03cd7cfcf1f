//! Document trait implementation for [`ClassRoom`].

use crate::class_actor::ClassError;
use crate::model::{ClassCreate, ClassFilter, ClassId, ClassRoom, ClassUpdate};
use async_trait::async_trait;
use docstore::Document;

#[async_trait]
impl Document for ClassRoom {
    type Id = ClassId;
    type Create = ClassCreate;
    type Update = ClassUpdate;
    type Filter = ClassFilter;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ClassError;

    const COLLECTION: &'static str = "classes";

    fn from_create_params(id: ClassId, params: ClassCreate) -> Result<Self, ClassError> {
        Ok(Self {
            id,
            name: params.name,
            room: params.room,
        })
    }

    fn matches(&self, filter: &ClassFilter) -> bool {
        match filter {
            ClassFilter::Name(name) => &self.name == name,
        }
    }

    /// Handles updates to the class.
    ///
    /// Name uniqueness is checked by [`ClassClient`](crate::clients::ClassClient)
    /// before the update is sent.
    async fn on_update(&mut self, update: ClassUpdate, _ctx: &()) -> Result<(), ClassError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(room) = update.room {
            self.room = room;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ClassError> {
        Ok(())
    }
}
