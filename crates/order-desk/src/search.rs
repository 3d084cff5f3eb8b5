//! Linear search over orders and menu items.
//!
//! Every search is a full scan in input order; nothing is indexed. Results are clones, so the
//! searched collection (usually a queue snapshot or a history page) is never touched.

use crate::model::{MenuItem, Order};

/// Every element of `source` the predicate accepts, in original order.
pub fn linear_search<I, P>(source: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().filter(|item| predicate(item)).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Customer and code filters. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub customer: String,
    pub code: String,
}

impl OrderQuery {
    pub fn new(customer: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            code: code.into(),
        }
    }

    pub fn by_customer(customer: impl Into<String>) -> Self {
        Self::new(customer, "")
    }

    pub fn matches(&self, order: &Order) -> bool {
        contains_ignore_case(&order.customer, &self.customer)
            && contains_ignore_case(&order.code, &self.code)
    }
}

/// Free-text menu query matched against item code, name and category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    pub text: String,
}

impl MenuQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let text = self.text.trim();
        contains_ignore_case(&item.code, text)
            || contains_ignore_case(&item.name, text)
            || contains_ignore_case(&item.category, text)
    }
}

pub fn search_orders(orders: &[Order], query: &OrderQuery) -> Vec<Order> {
    linear_search(orders.iter().cloned(), |order| query.matches(order))
}

pub fn search_menu(items: &[MenuItem], query: &MenuQuery) -> Vec<MenuItem> {
    linear_search(items.iter().cloned(), |item| query.matches(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, MenuItemId};

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new(MenuItemId(1), "LAT", "Latte", "Coffee", 4.50),
            MenuItem::new(MenuItemId(2), "ESP", "Espresso", "Coffee", 3.25),
            MenuItem::new(MenuItemId(3), "GRT", "Green Tea", "Tea", 3.75),
        ]
    }

    fn order(code: &str, customer: &str) -> Order {
        Order::new(
            code,
            Some(customer),
            vec![LineItem::new("ESP", "Espresso", "", 1, 3.25)],
            0.0,
        )
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_lat_finds_only_latte() {
        let found = search_menu(&menu(), &MenuQuery::new("lat"));
        assert_eq!(names(&found), vec!["Latte"]);
    }

    #[test]
    fn test_menu_query_checks_category_and_code() {
        let coffee = search_menu(&menu(), &MenuQuery::new("coffee"));
        assert_eq!(names(&coffee), vec!["Latte", "Espresso"]);
        assert_eq!(names(&search_menu(&menu(), &MenuQuery::new("grt"))), vec!["Green Tea"]);
        assert!(search_menu(&menu(), &MenuQuery::new("mocha")).is_empty());
    }

    #[test]
    fn test_empty_menu_query_returns_everything() {
        assert_eq!(search_menu(&menu(), &MenuQuery::default()), menu());
        assert_eq!(search_menu(&menu(), &MenuQuery::new("  ")), menu());
    }

    #[test]
    fn test_order_query_needs_both_fields() {
        let orders = vec![
            order("A001", "Alex"),
            order("A002", "alexis"),
            order("B003", "Brooke"),
        ];

        let found = search_orders(&orders, &OrderQuery::by_customer("ALEX"));
        assert_eq!(found.len(), 2);

        let found = search_orders(&orders, &OrderQuery::new("alex", "002"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "A002");

        assert_eq!(search_orders(&orders, &OrderQuery::default()).len(), 3);
        assert!(search_orders(&orders, &OrderQuery::new("casey", "")).is_empty());
    }

    #[test]
    fn test_linear_search_keeps_order_and_handles_empty_input() {
        let evens = linear_search(vec![5, 2, 8, 3, 4], |n| n % 2 == 0);
        assert_eq!(evens, vec![2, 8, 4]);

        let none: Vec<u32> = linear_search(Vec::<u32>::new(), |_| true);
        assert!(none.is_empty());
    }
}
