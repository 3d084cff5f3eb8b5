//! # Order Desk
//!
//! [`OrderDesk`] owns the active queue and drives each order through its lifecycle:
//!
//! 1. **Place**: validate, save to the order store, append to the queue.
//! 2. **Serve** ([`OrderDesk::process_next`]): take the head of the queue,
//!    `PENDING → IN_PROGRESS`.
//! 3. **Pay** ([`OrderDesk::record_payment`]): `→ COMPLETED`, paid. Only served orders; a
//!    waiting order is refused.
//!
//! The queue is the source of truth for what is waiting; the store is told about every change.
//! When the store cannot be reached the local change still happens and the returned
//! [`Outcome`] carries the failure as a warning, so callers always know whether the write
//! was durable. An order whose save failed has no `record_id`; the next status change saves
//! it instead of updating it.

use crate::clients::OrderStoreClient;
use crate::config::DeskConfig;
use crate::error::DeskError;
use crate::model::{Cart, CartError, Order, OrderCodeGenerator, OrderDefect, OrderId, OrderStatus};
use crate::order_store::StoreError;
use crate::queue::ActiveQueue;
use crate::search::{search_orders, OrderQuery};
use crate::sort::{sort_orders, Direction, OrderSortKey, SortAlgorithm};
use tracing::{debug, info, instrument, warn};

/// Result of a desk operation that reached the store, or tried to.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    /// Set when the local change happened but the store did not record it.
    pub warning: Option<StoreError>,
}

impl<T> Outcome<T> {
    fn new(value: T, warning: Option<StoreError>) -> Self {
        Self { value, warning }
    }

    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }
}

/// An order admitted to the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub code: String,
    pub record_id: Option<OrderId>,
    /// 1-based place in line.
    pub position: usize,
}

/// What a reload from the store did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reload {
    pub loaded: usize,
    /// Active orders left out because the queue was full.
    pub overflow: usize,
}

pub struct OrderDesk {
    queue: ActiveQueue,
    store: OrderStoreClient,
    codes: OrderCodeGenerator,
    tax_rate: f64,
    history_limit: usize,
}

impl OrderDesk {
    pub fn new(store: OrderStoreClient, config: &DeskConfig) -> Self {
        Self {
            queue: ActiveQueue::new(),
            store,
            codes: OrderCodeGenerator::new(config.code_prefix.clone()),
            tax_rate: config.tax_rate,
            history_limit: config.history_limit,
        }
    }

    pub fn store(&self) -> &OrderStoreClient {
        &self.store
    }

    /// Next free order code. Codes still waiting in the queue are skipped.
    pub fn next_code(&mut self) -> String {
        let mut code = self.codes.next_code();
        for _ in 0..self.queue.capacity() {
            if !self.queue.contains_code(&code) {
                break;
            }
            code = self.codes.next_code();
        }
        code
    }

    /// Builds a `PENDING` order from the cart with a fresh code and the configured tax rate.
    pub fn checkout(&mut self, cart: &Cart, customer: Option<&str>) -> Result<Order, DeskError> {
        if cart.is_empty() {
            return Err(CartError::Empty.into());
        }
        let code = self.next_code();
        Ok(cart.checkout(code, customer, self.tax_rate)?)
    }

    /// Admits an order: checks it, saves it, then appends it to the queue.
    ///
    /// Rejected orders are neither saved nor queued. A failed save still queues the order and
    /// is reported as the outcome's warning.
    #[instrument(skip(self, order), fields(code = %order.code))]
    pub async fn place_order(&mut self, mut order: Order) -> Result<Outcome<Placed>, DeskError> {
        debug!(?order, "place_order called");
        if self.queue.is_full() {
            return Err(DeskError::QueueFull {
                capacity: self.queue.capacity(),
            });
        }
        order.validate()?;
        if !order.status.is_queued() {
            return Err(OrderDefect::NotPending {
                code: order.code,
                status: order.status,
            }
            .into());
        }
        if self.queue.contains_code(&order.code) {
            return Err(OrderDefect::DuplicateCode(order.code).into());
        }
        self.codes.observe(&order.code);

        let warning = match self.store.save_order(order.clone()).await {
            Ok(id) => {
                order.record_id = Some(id);
                None
            }
            Err(e) => {
                warn!(error = %e, "Order queued without being saved");
                Some(e)
            }
        };

        let code = order.code.clone();
        let record_id = order.record_id;
        self.queue.enqueue(order).map_err(|(e, _)| DeskError::from(e))?;
        let position = self.queue.size();
        info!(position, "Order placed");

        Ok(Outcome::new(
            Placed {
                code,
                record_id,
                position,
            },
            warning,
        ))
    }

    /// Serves the oldest waiting order: removes it from the queue and marks it `IN_PROGRESS`.
    ///
    /// A head that cannot be served stays where it is. Once the transition is allowed the
    /// order leaves the queue whether or not the store records it.
    #[instrument(skip(self))]
    pub async fn process_next(&mut self) -> Result<Outcome<Order>, DeskError> {
        let head = self.queue.peek().ok_or(DeskError::QueueEmpty)?;
        let next = head
            .status
            .serve()
            .map_err(|e| DeskError::IllegalTransition {
                code: head.code.clone(),
                from: e.from,
                to: e.to,
            })?;

        let mut order = self.queue.dequeue()?;
        order.status = next;
        let warning = self.persist_status(&mut order).await;
        info!(code = %order.code, waiting = self.queue.size(), "Order served");
        Ok(Outcome::new(order, warning))
    }

    /// Marks the order paid and `COMPLETED`. Paying an order that is already paid and
    /// completed does nothing and does not contact the store.
    ///
    /// An order still waiting in the queue cannot be paid for; it has to be served first.
    #[instrument(skip(self, order), fields(code = %order.code))]
    pub async fn record_payment(&mut self, order: &mut Order) -> Result<Outcome<()>, DeskError> {
        if order.paid && order.status.is_terminal() {
            debug!("Order already settled");
            return Ok(Outcome::new((), None));
        }
        if order.status.is_queued() && self.queue.contains_code(&order.code) {
            return Err(DeskError::IllegalTransition {
                code: order.code.clone(),
                from: order.status,
                to: OrderStatus::Completed,
            });
        }
        order.status = order.status.settle();
        order.paid = true;
        let warning = self.persist_status(order).await;
        info!(total = order.total, "Payment recorded");
        Ok(Outcome::new((), warning))
    }

    /// Replaces the queue with the store's active orders, oldest first.
    ///
    /// If the store cannot be read the queue is left as it was. Orders beyond the queue's
    /// capacity are counted in [`Reload::overflow`] and stay in the store only.
    #[instrument(skip(self))]
    pub async fn load_active_orders(&mut self) -> Result<Reload, DeskError> {
        let orders = self.store.load_active_orders().await?;

        self.queue.clear();
        let mut reload = Reload {
            loaded: 0,
            overflow: 0,
        };
        for order in orders {
            self.codes.observe(&order.code);
            match self.queue.enqueue(order) {
                Ok(()) => reload.loaded += 1,
                Err((_, order)) => {
                    debug!(code = %order.code, "No room for active order");
                    reload.overflow += 1;
                }
            }
        }
        if reload.overflow > 0 {
            warn!(overflow = reload.overflow, "Active orders exceed queue capacity");
        }
        info!(loaded = reload.loaded, "Active orders reloaded");
        Ok(reload)
    }

    /// Tells the store about the order's current status, saving it first if it never was.
    async fn persist_status(&self, order: &mut Order) -> Option<StoreError> {
        let result = match order.record_id {
            Some(id) => self
                .store
                .update_order_status(id, order.status, order.paid)
                .await
                .map(|_| ()),
            None => self
                .store
                .save_order(order.clone())
                .await
                .map(|id| order.record_id = Some(id)),
        };
        match result {
            Ok(()) => None,
            Err(e) => {
                warn!(code = %order.code, error = %e, "Status change not recorded by store");
                Some(e)
            }
        }
    }

    // --- Read-only views ---

    /// Copy of the waiting orders, oldest first.
    pub fn snapshot(&self) -> Vec<Order> {
        self.queue.traverse()
    }

    pub fn peek(&self) -> Option<&Order> {
        self.queue.peek()
    }

    pub fn waiting(&self) -> usize {
        self.queue.size()
    }

    /// Waiting orders the store has no record of.
    pub fn unsaved(&self) -> usize {
        self.queue
            .iter()
            .filter(|order| order.record_id.is_none())
            .count()
    }

    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.queue.position_of(code)
    }

    pub fn search_active(&self, query: &OrderQuery) -> Vec<Order> {
        search_orders(&self.snapshot(), query)
    }

    /// Served and completed orders from the store, newest first.
    pub async fn search_history(&self, query: &OrderQuery) -> Result<Vec<Order>, DeskError> {
        Ok(self
            .store
            .load_order_history(&query.customer, &query.code, self.history_limit)
            .await?)
    }

    /// Waiting orders sorted for display. The queue itself keeps arrival order.
    pub fn ranked_active(
        &self,
        key: OrderSortKey,
        direction: Direction,
        algorithm: SortAlgorithm,
    ) -> Vec<Order> {
        let mut orders = self.snapshot();
        sort_orders(&mut orders, key, direction, algorithm);
        orders
    }
}
