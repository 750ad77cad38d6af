//! In-memory resource store.
//!
//! The API keeps no external storage: each resource lives in a process-wide
//! collection guarded for concurrent access, seeded with sample rows. Ids are
//! assigned from a per-resource monotonic counter that starts past the seed
//! data, so the first created record always gets the next free id.

use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::handlers::{
    customers::Customer, employees::Employee, orders::Order, production::Production,
    products::Product,
};

/// A single resource collection: append-only, thread-safe, monotonic ids.
#[derive(Debug)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Collection<T> {
    fn new(seed: Vec<T>) -> Self {
        // Seed rows use ids 1..=len, the counter continues from there.
        let next_id = AtomicI64::new(seed.len() as i64 + 1);

        Self {
            items: RwLock::new(seed),
            next_id,
        }
    }

    /// Snapshot of all records in creation order.
    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    /// Assign the next id, build the record with it and append it.
    pub async fn insert<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = build(id);

        self.items.write().await.push(item.clone());

        item
    }
}

/// Shared state for all resource handlers.
#[derive(Debug)]
pub struct Store {
    pub employees: Collection<Employee>,
    pub products: Collection<Product>,
    pub orders: Collection<Order>,
    pub customers: Collection<Customer>,
    pub production: Collection<Production>,
}

impl Store {
    /// Store pre-populated with one sample row per resource.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            employees: Collection::new(vec![Employee {
                id: 1,
                name: "Jhon Smith".to_string(),
                role: "Engineer".to_string(),
                email: "jhon@example.com".to_string(),
            }]),
            products: Collection::new(vec![Product {
                id: 1,
                name: "Widget".to_string(),
                price: 9.99,
                stock: 100,
            }]),
            orders: Collection::new(vec![Order {
                id: 1,
                customer_id: 1,
                product_ids: vec![1, 2],
                quantity: 5,
            }]),
            customers: Collection::new(vec![Customer {
                id: 1,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-1234".to_string(),
            }]),
            production: Collection::new(vec![Production {
                id: 1,
                product_id: 1,
                quantity: 100,
            }]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_has_one_row_per_resource() {
        let store = Store::seeded();

        assert_eq!(store.employees.list().await.len(), 1);
        assert_eq!(store.products.list().await.len(), 1);
        assert_eq!(store.orders.list().await.len(), 1);
        assert_eq!(store.customers.list().await.len(), 1);
        assert_eq!(store.production.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_assigns_monotonic_ids_after_seed() {
        let store = Store::seeded();

        let first = store
            .production
            .insert(|id| Production {
                id,
                product_id: 7,
                quantity: 10,
            })
            .await;
        let second = store
            .production
            .insert(|id| Production {
                id,
                product_id: 7,
                quantity: 20,
            })
            .await;

        assert_eq!(first.id, 2);
        assert_eq!(second.id, 3);

        let rows = store.production.list().await;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].quantity, 10);
        assert_eq!(rows[2].quantity, 20);
    }

    #[tokio::test]
    async fn test_collections_count_ids_independently() {
        let store = Store::seeded();

        let employee = store
            .employees
            .insert(|id| Employee {
                id,
                name: "Alice Smith".to_string(),
                role: "Manager".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await;
        let customer = store
            .customers
            .insert(|id| Customer {
                id,
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                phone: "555-0000".to_string(),
            })
            .await;

        assert_eq!(employee.id, 2);
        assert_eq!(customer.id, 2);
    }
}
