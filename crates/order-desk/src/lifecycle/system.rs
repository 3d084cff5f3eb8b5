use crate::clients::MenuClient;
use crate::config::DeskConfig;
use crate::lifecycle::OrderDesk;
use crate::{menu_store, order_store};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

/// The running shop: both record stores on their own tasks, plus the desk and a menu client.
///
/// # Example
///
/// ```ignore
/// let mut shop = ShopSystem::new(&DeskConfig::load()?);
/// shop.menu.add_item(MenuItemCreate::new("LAT", "Latte", "Coffee", 4.50)).await?;
/// let order = shop.desk.checkout(&cart, Some("Alex"))?;
/// shop.desk.place_order(order).await?;
/// shop.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub desk: OrderDesk,
    pub menu: MenuClient,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts the order and menu stores and builds the desk on top of them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &DeskConfig) -> Self {
        let (order_actor, order_store) = order_store::new(config.store_buffer);
        let (menu_actor, menu) = menu_store::new(config.store_buffer);

        // Neither store depends on anything (Context = ())
        let order_handle = tokio::spawn(order_actor.run(()));
        let menu_handle = tokio::spawn(menu_actor.run(()));

        Self {
            desk: OrderDesk::new(order_store, config),
            menu,
            handles: vec![order_handle, menu_handle],
        }
    }

    /// Stops both stores and waits for them to finish.
    ///
    /// Dropping the desk and the menu client closes the store channels; each actor then
    /// leaves its loop. Waiting orders whose save failed are lost with the queue; their
    /// count is logged.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let unsaved = self.desk.unsaved();
        if unsaved > 0 {
            warn!(unsaved, "Waiting orders never reached the order store");
        }
        info!(waiting = self.desk.waiting(), "Shutting down shop...");
        drop(self.desk);
        drop(self.menu);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("Shop shutdown complete.");
        Ok(())
    }
}
