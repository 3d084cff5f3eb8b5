//! # Order Store Client
//!
//! The desk's view of the order store. Wraps a `ResourceClient<Order>` and exposes the four
//! calls the desk needs: save, status update, active reload and history lookup.
use crate::model::{Order, OrderAction, OrderId, OrderStatus, StatusUpdate};
use crate::order_store::StoreError;
use crate::search::{linear_search, OrderQuery};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderStoreClient {
    inner: ResourceClient<Order>,
}

impl OrderStoreClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Saves a new order and returns the id the store assigned.
    #[instrument(skip(self, order), fields(code = %order.code))]
    pub async fn save_order(&self, order: Order) -> Result<OrderId, StoreError> {
        debug!(?order, "save_order called");
        self.inner.create(order).await.map_err(StoreError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        paid: bool,
    ) -> Result<Order, StoreError> {
        debug!("Sending request");
        self.inner
            .update(id, StatusUpdate { status, paid })
            .await
            .map_err(StoreError::from)
    }

    /// Orders still waiting to be served (`PENDING`), oldest first.
    #[instrument(skip(self))]
    pub async fn load_active_orders(&self) -> Result<Vec<Order>, StoreError> {
        debug!("Sending request");
        let all = self.inner.list().await.map_err(StoreError::from)?;
        Ok(linear_search(all, |order| order.status.is_queued()))
    }

    /// Served and completed orders matching the filters, newest first, at most `limit`.
    #[instrument(skip(self))]
    pub async fn load_order_history(
        &self,
        customer_filter: &str,
        code_filter: &str,
        limit: usize,
    ) -> Result<Vec<Order>, StoreError> {
        debug!("Sending request");
        let query = OrderQuery::new(customer_filter, code_filter);
        let all = self.inner.list().await.map_err(StoreError::from)?;
        let mut history = linear_search(all.into_iter().rev(), |order| {
            !order.status.is_queued() && query.matches(order)
        });
        history.truncate(limit);
        Ok(history)
    }

    /// One-line summary of a stored order.
    #[instrument(skip(self))]
    pub async fn describe(&self, id: OrderId) -> Result<String, StoreError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Describe)
            .await
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderStoreClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }
}
