//! In-memory [`ProductStore`] double with failure injection.

use std::sync::Mutex;

use async_trait::async_trait;
use tienda_core::{Product, ProductFields};
use tienda_db::{DbError, DbResult, ProductStore};

/// A store call, recorded in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    Initialize,
    ListAll,
    ListByCategory(String),
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Product>,
    next_id: i64,
    failing: Vec<Op>,
    calls: Vec<Op>,
}

pub struct TestStore {
    inner: Mutex<Inner>,
}

impl TestStore {
    pub fn empty() -> Self {
        TestStore {
            inner: Mutex::new(Inner {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Starts with the same two rows the SQLite store seeds.
    pub fn seeded() -> Self {
        let store = TestStore::empty();
        {
            let mut inner = store.inner.lock().unwrap();
            insert(&mut inner, &ProductFields::new("Laptop", 3500.0, 10, "Electrónica"));
            insert(&mut inner, &ProductFields::new("Camiseta", 50.0, 20, "Ropa"));
        }
        store
    }

    /// Every later call of `op` fails with a query error.
    pub fn fail_on(&self, op: Op) {
        self.inner.lock().unwrap().failing.push(op);
    }

    /// Stored rows in insertion order.
    pub fn rows(&self) -> Vec<Product> {
        self.inner.lock().unwrap().rows.clone()
    }

    pub fn calls(&self) -> Vec<Op> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(&self, op: Op) -> DbResult<std::sync::MutexGuard<'_, Inner>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(op.clone());
        if inner.failing.contains(&op) {
            return Err(DbError::QueryFailed(format!("simulated failure: {:?}", op)));
        }
        Ok(inner)
    }
}

fn insert(inner: &mut Inner, fields: &ProductFields) -> i64 {
    let id = inner.next_id;
    inner.next_id += 1;
    inner.rows.push(Product {
        id,
        name: fields.name.clone(),
        price: fields.price,
        stock: fields.stock,
        category: fields.category.clone(),
    });
    id
}

fn newest_first<'a>(rows: impl Iterator<Item = &'a Product>) -> Vec<Product> {
    let mut out: Vec<Product> = rows.cloned().collect();
    out.sort_by(|a, b| b.id.cmp(&a.id));
    out
}

#[async_trait]
impl ProductStore for TestStore {
    async fn initialize(&self) -> DbResult<()> {
        self.record(Op::Initialize).map(|_| ())
    }

    async fn list_all(&self) -> DbResult<Vec<Product>> {
        let inner = self.record(Op::ListAll)?;
        Ok(newest_first(inner.rows.iter()))
    }

    async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let inner = self.record(Op::ListByCategory(category.to_string()))?;
        Ok(newest_first(inner.rows.iter().filter(|p| p.category == category)))
    }

    async fn create(&self, fields: &ProductFields) -> DbResult<i64> {
        let mut inner = self.record(Op::Create)?;
        Ok(insert(&mut inner, fields))
    }

    async fn update(&self, id: i64, fields: &ProductFields) -> DbResult<()> {
        let mut inner = self.record(Op::Update)?;
        if let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) {
            row.name = fields.name.clone();
            row.price = fields.price;
            row.stock = fields.stock;
            row.category = fields.category.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let mut inner = self.record(Op::Delete)?;
        inner.rows.retain(|p| p.id != id);
        Ok(())
    }
}
