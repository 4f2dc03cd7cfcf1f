//! # Class Client
//!
//! Staff-facing API for the `classes` collection, with name-uniqueness checks.
use crate::class_actor::ClassError;
use crate::model::{ClassFilter, ClassForm, ClassId, ClassRoom, ClassUpdate, Session};
use crate::validation::parse_class;
use async_trait::async_trait;
use docstore::{CollectionClient, CollectionHandle, StoreError};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct ClassClient {
    inner: CollectionClient<ClassRoom>,
}

impl ClassClient {
    pub fn new(inner: CollectionClient<ClassRoom>) -> Self {
        Self { inner }
    }

    /// Validate the form, check the name is free, then add the class.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn add_class(&self, session: &Session, form: &ClassForm) -> Result<ClassId, ClassError> {
        session.require_staff()?;
        let create = parse_class(form)?;
        self.ensure_name_free(&create.name, None).await?;

        debug!("Sending request");
        let id = self.inner.add(create).await?;
        info!(%id, "Class added");
        Ok(id)
    }

    /// Replace the class's name and room. The name must not belong to another class.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update_class(
        &self,
        session: &Session,
        id: ClassId,
        form: &ClassForm,
    ) -> Result<ClassRoom, ClassError> {
        session.require_staff()?;
        let create = parse_class(form)?;
        self.ensure_name_free(&create.name, Some(id)).await?;

        debug!("Sending request");
        Ok(self.inner.update(id, ClassUpdate::from(create)).await?)
    }

    /// Remove a class. Orders placed for it keep its name and room.
    #[instrument(skip(self))]
    pub async fn delete_class(&self, session: &Session, id: ClassId) -> Result<(), ClassError> {
        session.require_staff()?;
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    /// The class named `name`, if any.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ClassRoom>, ClassError> {
        debug!("Sending request");
        let found = self.inner.find(ClassFilter::Name(name.to_string())).await?;
        Ok(found.into_iter().next())
    }

    async fn ensure_name_free(&self, name: &str, editing: Option<ClassId>) -> Result<(), ClassError> {
        let taken = self
            .inner
            .find(ClassFilter::Name(name.to_string()))
            .await?
            .iter()
            .any(|class| Some(class.id) != editing);
        if taken {
            return Err(ClassError::AlreadyExists(name.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionHandle<ClassRoom> for ClassClient {
    type Error = ClassError;

    fn inner(&self) -> &CollectionClient<ClassRoom> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ClassError::from(e)
    }
}
