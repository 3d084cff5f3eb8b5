use order_desk::config::DeskConfig;
use order_desk::lifecycle::ShopSystem;
use order_desk::model::{Cart, LineItem, MenuItemCreate, MenuItemUpdate, Order, OrderStatus};
use order_desk::search::{MenuQuery, OrderQuery};
use order_desk::sort::{sort_menu, Direction, MenuSortKey, SortAlgorithm};
use order_desk::DeskError;
use record_actor::ActorClient;

fn order(code: &str, customer: &str) -> Order {
    Order::new(
        code,
        Some(customer),
        vec![LineItem::new("ESP", "Espresso", "", 1, 3.25)],
        0.08,
    )
}

fn codes(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.code.as_str()).collect()
}

/// Full path through the real stores: Order desk + Order store actor + Menu store actor.
#[tokio::test]
async fn test_cart_to_payment_through_real_stores() {
    let mut shop = ShopSystem::new(&DeskConfig::default());

    let latte = shop
        .menu
        .add_item(MenuItemCreate::new("LAT", "Latte", "Coffee", 4.50))
        .await
        .unwrap();
    shop.menu
        .add_item(MenuItemCreate::new("ESP", "Espresso", "Coffee", 3.25))
        .await
        .unwrap();

    let menu = shop.menu.list_menu().await.unwrap();
    let mut cart = Cart::new();
    cart.add(&menu[0], "Large", 2).unwrap();
    cart.add(&menu[1], "", 1).unwrap();

    let order = shop.desk.checkout(&cart, Some("Alex")).unwrap();
    assert_eq!(order.code, "A001");
    assert_eq!(order.total, 13.23);

    let placed = shop.desk.place_order(order).await.unwrap();
    assert!(placed.is_durable());
    let id = placed.value.record_id.unwrap();
    assert_eq!(shop.desk.position_of("A001"), Some(1));

    let mut served = shop.desk.process_next().await.unwrap().value;
    assert_eq!(served.status, OrderStatus::InProgress);
    assert!(shop.desk.snapshot().is_empty());

    let paid = shop.desk.record_payment(&mut served).await.unwrap();
    assert!(paid.is_durable());

    let stored = shop.desk.store().get(id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Completed);
    assert!(stored.paid);
    assert_eq!(
        shop.desk.store().describe(id).await.unwrap(),
        "A001 Alex x3 13.23 COMPLETED paid"
    );

    let history = shop
        .desk
        .search_history(&OrderQuery::by_customer("alex"))
        .await
        .unwrap();
    assert_eq!(codes(&history), vec!["A001"]);

    // Hidden items drop out of the menu but stay in the store.
    assert!(shop.menu.set_available(latte, false).await.unwrap());
    assert_eq!(shop.menu.list_menu().await.unwrap().len(), 1);
    assert_eq!(shop.menu.list().await.unwrap().len(), 2);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_three_customers_served_in_arrival_order() {
    let mut shop = ShopSystem::new(&DeskConfig::default());

    for (code, customer) in [("A001", "Alex"), ("A002", "Brooke"), ("A003", "Casey")] {
        shop.desk.place_order(order(code, customer)).await.unwrap();
    }
    assert_eq!(codes(&shop.desk.snapshot()), vec!["A001", "A002", "A003"]);

    let served = shop.desk.process_next().await.unwrap();
    assert_eq!(served.value.customer, "Alex");
    assert_eq!(codes(&shop.desk.snapshot()), vec!["A002", "A003"]);

    let found = shop.desk.search_active(&OrderQuery::by_customer("case"));
    assert_eq!(codes(&found), vec!["A003"]);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_full_queue_rejects_without_saving() {
    let mut shop = ShopSystem::new(&DeskConfig::default());

    for n in 1..=50 {
        shop.desk
            .place_order(order(&format!("A{n:03}"), "Alex"))
            .await
            .unwrap();
    }
    let rejected = shop.desk.place_order(order("A051", "Late")).await;
    assert_eq!(rejected, Err(DeskError::QueueFull { capacity: 50 }));
    assert_eq!(shop.desk.waiting(), 50);

    let stored = shop.desk.store().list().await.unwrap();
    assert_eq!(stored.len(), 50);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reload_restores_waiting_orders() {
    let mut shop = ShopSystem::new(&DeskConfig::default());

    for (code, customer) in [("A001", "Alex"), ("A002", "Brooke"), ("A003", "Casey")] {
        shop.desk.place_order(order(code, customer)).await.unwrap();
    }
    shop.desk.process_next().await.unwrap();

    let reload = shop.desk.load_active_orders().await.unwrap();
    assert_eq!(reload.loaded, 2);
    assert_eq!(reload.overflow, 0);
    assert_eq!(codes(&shop.desk.snapshot()), vec!["A002", "A003"]);
    assert_eq!(shop.desk.next_code(), "A004");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_store_refuses_backwards_status() {
    let shop = ShopSystem::new(&DeskConfig::default());
    let store = shop.desk.store().clone();

    let id = store.save_order(order("A001", "Alex")).await.unwrap();
    store
        .update_order_status(id, OrderStatus::InProgress, false)
        .await
        .unwrap();
    let back = store
        .update_order_status(id, OrderStatus::Pending, false)
        .await;
    assert!(back.is_err());

    drop(store);
    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_search_and_price_ranking() {
    let shop = ShopSystem::new(&DeskConfig::default());
    for (code, name, category, price) in [
        ("LAT", "Latte", "Coffee", 4.50),
        ("ESP", "Espresso", "Coffee", 3.25),
        ("GRT", "Green Tea", "Tea", 3.75),
    ] {
        shop.menu
            .add_item(MenuItemCreate::new(code, name, category, price))
            .await
            .unwrap();
    }

    let found = shop.menu.search_menu(&MenuQuery::new("lat")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Latte");
    let everything = shop.menu.search_menu(&MenuQuery::default()).await.unwrap();
    assert_eq!(everything.len(), 3);

    let mut menu = shop.menu.list_menu().await.unwrap();
    sort_menu(
        &mut menu,
        MenuSortKey::Price,
        Direction::Ascending,
        SortAlgorithm::Insertion,
    );
    let names: Vec<_> = menu.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Espresso", "Green Tea", "Latte"]);

    let repriced = shop
        .menu
        .update_item(
            menu[0].id,
            MenuItemUpdate {
                price: Some(3.50),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(repriced.price, 3.50);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_waiting_order_stays_unpaid_until_served() {
    let mut shop = ShopSystem::new(&DeskConfig::default());

    let placed = shop.desk.place_order(order("A001", "Alex")).await.unwrap();
    let id = placed.value.record_id.unwrap();

    let mut waiting = shop.desk.peek().cloned().unwrap();
    let early = shop.desk.record_payment(&mut waiting).await;
    assert!(matches!(early, Err(DeskError::IllegalTransition { .. })));

    let stored = shop.desk.store().get(id).await.unwrap().unwrap();
    assert_eq!((stored.status, stored.paid), (OrderStatus::Pending, false));

    let served = shop.desk.process_next().await.unwrap();
    assert!(served.is_durable());
    let mut served = served.value;
    assert!(shop.desk.record_payment(&mut served).await.unwrap().is_durable());

    let stored = shop.desk.store().get(id).await.unwrap().unwrap();
    assert_eq!((stored.status, stored.paid), (OrderStatus::Completed, true));

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sub_cent_menu_price_is_accepted() {
    let mut shop = ShopSystem::new(&DeskConfig::default());
    shop.menu
        .add_item(MenuItemCreate::new("SUG", "Sugar", "Extras", 0.125))
        .await
        .unwrap();

    let menu = shop.menu.list_menu().await.unwrap();
    let mut cart = Cart::new();
    cart.add(&menu[0], "", 1).unwrap();
    let order = shop.desk.checkout(&cart, None).unwrap();

    let placed = shop.desk.place_order(order).await.unwrap();
    assert!(placed.is_durable());
    assert_eq!(shop.desk.position_of("A001"), Some(1));

    shop.shutdown().await.unwrap();
}
