//! Plain data: orders, their status machine, menu items, the cart and order codes.

pub mod cart;
pub mod menu;
pub mod order;
pub mod order_code;
pub mod status;

pub use cart::{Cart, CartError};
pub use menu::{MenuAction, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use order::{
    round_cents, LineItem, Order, OrderAction, OrderDefect, OrderId, StatusUpdate, WALK_IN,
};
pub use order_code::OrderCodeGenerator;
pub use status::{OrderStatus, TransitionError};
