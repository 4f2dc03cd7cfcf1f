//! Document trait implementation for [`MenuItem`].
//!
//! Menu items have no dependencies and no custom actions. The store rejects a
//! non-positive price or preparation time even if a caller skipped form validation.

use crate::menu_actor::MenuError;
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use crate::validation::FormErrors;
use async_trait::async_trait;
use docstore::Document;

fn check_positive(price: f64, prep_time: u32) -> Result<(), MenuError> {
    let mut errors = FormErrors::new();
    if !price.is_finite() || price <= 0.0 {
        errors.add("price", "Price must be a positive number");
    }
    if prep_time == 0 {
        errors.add("prep_time", "Preparation time must be a positive number");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(MenuError::Invalid(errors))
    }
}

#[async_trait]
impl Document for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Filter = MenuFilter;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    const COLLECTION: &'static str = "menuItems";

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        check_positive(params.price, params.prep_time)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            description: params.description,
            allergens: params.allergens,
            prep_time: params.prep_time,
            image: params.image,
        })
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        match filter {
            MenuFilter::Name(name) => &self.name == name,
        }
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        check_positive(
            update.price.unwrap_or(self.price),
            update.prep_time.unwrap_or(self.prep_time),
        )?;
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(allergens) = update.allergens {
            self.allergens = allergens;
        }
        if let Some(prep_time) = update.prep_time {
            self.prep_time = prep_time;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}
