//! In-place comparison sorts for ranking menu items and orders.
//!
//! Both algorithms only swap elements; element content is never altered. Insertion sort is
//! stable, selection sort is not. Sorting is for display: callers sort snapshots, never the
//! active queue.

use crate::model::{MenuItem, Order};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortAlgorithm {
    #[default]
    Insertion,
    Selection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSortKey {
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSortKey {
    Total,
    CreatedAt,
}

/// Each element moves left past every element greater than it.
pub fn insertion_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// For each position, the minimum of the unsorted rest is swapped into place.
pub fn selection_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if cmp(&items[j], &items[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

pub fn sort_with<T, F>(algorithm: SortAlgorithm, items: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    match algorithm {
        SortAlgorithm::Insertion => insertion_sort(items, cmp),
        SortAlgorithm::Selection => selection_sort(items, cmp),
    }
}

pub fn compare_menu(key: MenuSortKey, a: &MenuItem, b: &MenuItem) -> Ordering {
    match key {
        MenuSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        MenuSortKey::Price => a.price.total_cmp(&b.price),
    }
}

pub fn compare_orders(key: OrderSortKey, a: &Order, b: &Order) -> Ordering {
    match key {
        OrderSortKey::Total => a.total.total_cmp(&b.total),
        OrderSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

pub fn sort_menu(
    items: &mut [MenuItem],
    key: MenuSortKey,
    direction: Direction,
    algorithm: SortAlgorithm,
) {
    sort_with(algorithm, items, |a, b| direction.apply(compare_menu(key, a, b)));
}

pub fn sort_orders(
    orders: &mut [Order],
    key: OrderSortKey,
    direction: Direction,
    algorithm: SortAlgorithm,
) {
    sort_with(algorithm, orders, |a, b| {
        direction.apply(compare_orders(key, a, b))
    });
}
