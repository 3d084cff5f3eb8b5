//! # Menu Client
//!
//! High-level API over the menu store: add and edit items, hide or show them, and list or
//! search what customers can currently order.
use crate::menu_store::MenuError;
use crate::model::{MenuAction, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use crate::search::{self, MenuQuery};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(MenuError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(MenuError::from)
    }

    /// Shows or hides an item. Returns whether it was available before.
    #[instrument(skip(self))]
    pub async fn set_available(&self, id: MenuItemId, available: bool) -> Result<bool, MenuError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, MenuAction::SetAvailable(available))
            .await
            .map_err(MenuError::from)
    }

    /// Items customers can order right now, in the order they were added.
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        let all = self.inner.list().await.map_err(MenuError::from)?;
        Ok(search::linear_search(all, |item| item.available))
    }

    /// Available items matching the query. An empty query returns the whole menu.
    #[instrument(skip(self))]
    pub async fn search_menu(&self, query: &MenuQuery) -> Result<Vec<MenuItem>, MenuError> {
        let menu = self.list_menu().await?;
        Ok(search::search_menu(&menu, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_actor::mock::{create_mock_client, expect_action, MockClient};

    fn item(id: u32, name: &str, available: bool) -> MenuItem {
        let mut item = MenuItem::new(MenuItemId(id), name[..3].to_uppercase(), name, "Coffee", 4.0);
        item.available = available;
        item
    }

    #[tokio::test]
    async fn test_set_available_sends_action() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task = tokio::spawn(async move { menu.set_available(MenuItemId(2), false).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuItemId(2));
        assert!(matches!(action, MenuAction::SetAvailable(false)));
        responder.send(Ok(true)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_list_and_search_skip_hidden_items() {
        let mut mock = MockClient::<MenuItem>::new();
        let stock = vec![
            item(1, "Latte", true),
            item(2, "Lavender Latte", false),
            item(3, "Mocha", true),
        ];
        mock.expect_list().return_ok(stock.clone());
        mock.expect_list().return_ok(stock);
        let menu = MenuClient::new(mock.client());

        let listed = menu.list_menu().await.unwrap();
        assert_eq!(listed.len(), 2);

        let found = menu.search_menu(&MenuQuery::new("lat")).await.unwrap();
        let names: Vec<_> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Latte"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_rejection_keeps_store_message() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(MenuError::InvalidPrice(-2.0))));
        let menu = MenuClient::new(mock.client());

        let err = menu
            .add_item(MenuItemCreate::new("BAD", "Bad", "Misc", -2.0))
            .await
            .unwrap_err();
        assert_eq!(err, MenuError::Rejected("Invalid price: -2".to_string()));
    }
}
