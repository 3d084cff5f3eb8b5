//! # Order Desk demo
//!
//! Runs one short shift against in-process stores:
//! 1. Seed the menu, then search and rank it.
//! 2. Check out three carts and place the orders.
//! 3. Serve the first order and take payment for it.
//! 4. Look the order up in the history, then shut down.
//!
//! `RUST_LOG=info` shows the desk's log lines; see [`order_desk::config`] for settings.

use order_desk::config::DeskConfig;
use order_desk::lifecycle::{setup_tracing, ShopSystem};
use order_desk::model::{Cart, MenuItemCreate};
use order_desk::search::{MenuQuery, OrderQuery};
use order_desk::sort::{sort_menu, Direction, MenuSortKey, OrderSortKey, SortAlgorithm};
use tracing::{info, warn, Instrument};

type DemoResult<T> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> DemoResult<()> {
    setup_tracing();

    let config = DeskConfig::load()?;
    info!(?config, "Starting order desk");
    let mut shop = ShopSystem::new(&config);

    // Menu
    let span = tracing::info_span!("menu_setup");
    async {
        for (code, name, category, price) in [
            ("LAT", "Latte", "Coffee", 4.50),
            ("ESP", "Espresso", "Coffee", 3.25),
            ("GRT", "Green Tea", "Tea", 3.75),
            ("CRO", "Croissant", "Bakery", 2.95),
        ] {
            shop.menu
                .add_item(MenuItemCreate::new(code, name, category, price))
                .await?;
        }
        DemoResult::<()>::Ok(())
    }
    .instrument(span)
    .await?;

    let mut menu = shop.menu.list_menu().await?;
    sort_menu(
        &mut menu,
        MenuSortKey::Price,
        Direction::Ascending,
        SortAlgorithm::Insertion,
    );
    for item in &menu {
        info!(code = %item.code, name = %item.name, price = item.price, "On the menu");
    }
    let coffee = shop.menu.search_menu(&MenuQuery::new("coffee")).await?;
    info!(matches = coffee.len(), "Searched menu for coffee");

    // Orders
    let find = |code: &str| menu.iter().find(|item| item.code == code).cloned();
    let carts = [
        (Some("Alex"), vec![("LAT", "Large", 1), ("CRO", "", 2)]),
        (Some("Brooke"), vec![("ESP", "", 2)]),
        (None, vec![("GRT", "Hot", 1)]),
    ];
    let span = tracing::info_span!("order_intake");
    async {
        for (customer, lines) in carts {
            let mut cart = Cart::new();
            for (code, option, quantity) in lines {
                if let Some(item) = find(code) {
                    cart.add(&item, option, quantity)?;
                }
            }
            let order = shop.desk.checkout(&cart, customer)?;
            let placed = shop.desk.place_order(order).await?;
            if let Some(warning) = &placed.warning {
                warn!(code = %placed.value.code, %warning, "Order not saved");
            }
            let (code, position) = (&placed.value.code, placed.value.position);
            info!(%code, position, "Now serving soon");
        }
        DemoResult::<()>::Ok(())
    }
    .instrument(span)
    .await?;

    let ranked = shop.desk.ranked_active(
        OrderSortKey::Total,
        Direction::Descending,
        SortAlgorithm::Selection,
    );
    for order in ranked {
        info!(summary = %order.summary(), "Waiting");
    }

    // Service
    let span = tracing::info_span!("service");
    let served_code = async {
        let mut served = shop.desk.process_next().await?.value;
        shop.desk.record_payment(&mut served).await?;
        DemoResult::<String>::Ok(served.code)
    }
    .instrument(span)
    .await?;

    let history = shop
        .desk
        .search_history(&OrderQuery::new("", served_code.as_str()))
        .await?;
    for order in &history {
        info!(summary = %order.summary(), "History");
    }
    info!(waiting = shop.desk.waiting(), "Shift over");

    shop.shutdown().await?;
    Ok(())
}
