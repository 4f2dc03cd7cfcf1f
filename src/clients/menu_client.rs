//! # Menu Client
//!
//! High-level API for the `menuItems` collection. Staff-only mutations validate the
//! raw form with [`parse_menu_item`] before the store is contacted.
use crate::menu_actor::MenuError;
use crate::model::{MenuFilter, MenuItem, MenuItemForm, MenuItemId, MenuItemUpdate, Session};
use crate::validation::parse_menu_item;
use async_trait::async_trait;
use docstore::{CollectionClient, CollectionHandle, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: CollectionClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: CollectionClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn add_item(
        &self,
        session: &Session,
        form: &MenuItemForm,
    ) -> Result<MenuItemId, MenuError> {
        session.require_staff()?;
        let create = parse_menu_item(form)?;
        debug!("Sending request");
        let id = self.inner.add(create).await?;
        info!(%id, "Menu item added");
        Ok(id)
    }

    /// Replace every field of an existing item with the validated form.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update_item(
        &self,
        session: &Session,
        id: MenuItemId,
        form: &MenuItemForm,
    ) -> Result<MenuItem, MenuError> {
        session.require_staff()?;
        let update = MenuItemUpdate::from(parse_menu_item(form)?);
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    /// Remove an item. Past orders keep their name and price snapshot.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, session: &Session, id: MenuItemId) -> Result<(), MenuError> {
        session.require_staff()?;
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, MenuError> {
        debug!("Sending request");
        let found = self.inner.find(MenuFilter::Name(name.to_string())).await?;
        Ok(found.into_iter().next())
    }
}

#[async_trait]
impl CollectionHandle<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &CollectionClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        MenuError::from(e)
    }
}
