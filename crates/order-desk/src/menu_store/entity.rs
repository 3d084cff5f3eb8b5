//! [`ActorEntity`] implementation for [`MenuItem`].

use super::error::MenuError;
use crate::model::{MenuAction, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use record_actor::ActorEntity;

fn check_price(price: f64) -> Result<(), MenuError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(MenuError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = bool;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        Ok(Self::new(
            id,
            params.code.trim(),
            params.name.trim(),
            params.category.trim(),
            params.price,
        ))
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), MenuError> {
        if self.code.is_empty() {
            return Err(MenuError::MissingField("code"));
        }
        if self.name.is_empty() {
            return Err(MenuError::MissingField("name"));
        }
        check_price(self.price)
    }

    /// Applies the fields that are set.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(MenuError::MissingField("name"));
            }
            self.name = name.to_string();
        }
        if let Some(category) = update.category {
            self.category = category.trim().to_string();
        }
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<bool, MenuError> {
        match action {
            MenuAction::SetAvailable(available) => {
                let previous = self.available;
                self.available = available;
                Ok(previous)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> MenuItem {
        MenuItem::from_create_params(
            MenuItemId(1),
            MenuItemCreate::new(" LAT ", "Latte", "Coffee", 4.50),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_trims_and_validates() {
        let mut item = latte();
        assert_eq!(item.code, "LAT");
        assert!(item.on_create(&()).await.is_ok());

        let mut free = MenuItem::from_create_params(
            MenuItemId(2),
            MenuItemCreate::new("TAP", "Tap water", "Other", -1.0),
        )
        .unwrap();
        assert_eq!(free.on_create(&()).await, Err(MenuError::InvalidPrice(-1.0)));

        let mut nameless = MenuItem::from_create_params(
            MenuItemId(3),
            MenuItemCreate::new("XXX", "  ", "Other", 1.0),
        )
        .unwrap();
        assert_eq!(
            nameless.on_create(&()).await,
            Err(MenuError::MissingField("name"))
        );
    }

    #[tokio::test]
    async fn test_partial_update() {
        let mut item = latte();
        let update = MenuItemUpdate {
            price: Some(4.75),
            ..Default::default()
        };
        item.on_update(update, &()).await.unwrap();
        assert_eq!(item.price, 4.75);
        assert_eq!(item.name, "Latte");
    }

    #[tokio::test]
    async fn test_set_available_returns_previous_value() {
        let mut item = latte();
        let previous = item
            .handle_action(MenuAction::SetAvailable(false), &())
            .await
            .unwrap();
        assert!(previous);
        assert!(!item.available);
    }
}
