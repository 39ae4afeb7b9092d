use crate::model::{AccountId, Product, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock, PoisonError};
use ulid::{Generator, Ulid};

/// Type-safe identifier for Orders.
///
/// A ULID: globally unique and lexically sortable by creation time, so the
/// order store lists an account's orders oldest first. Ids generated within
/// the same millisecond still increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(Ulid);

impl OrderId {
    pub fn new() -> Self {
        static GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();
        let mut generator = GENERATOR
            .get_or_init(|| Mutex::new(Generator::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Only fails once the random part of one millisecond is exhausted
        Self(generator.generate().unwrap_or_else(|_| Ulid::new()))
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

/// One requested line of a create-order call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// An order line item: the product's descriptive fields and price as they
/// were when the order was placed, plus the ordered quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderedProduct {
    /// Freezes the current catalog data of `product` into a line item.
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Overwrites name, description and price with current catalog values.
    /// The quantity is never touched.
    pub fn redecorate(&mut self, product: &Product) {
        self.name.clone_from(&product.name);
        self.description.clone_from(&product.description);
        self.price = product.price;
    }
}

/// Sum of `price * quantity` over the given line items.
pub fn total_of(products: &[OrderedProduct]) -> Decimal {
    products.iter().map(OrderedProduct::line_total).sum()
}

/// A placed order.
///
/// `total_price` is computed once from the line snapshots when the order is
/// placed and is stored with it. Line items shown later may be redecorated
/// with current catalog data; the total is not recomputed.
///
/// # Actor Framework
/// Stored by the order actor through `Put` only; see
/// [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub account_id: AccountId,
    pub total_price: Decimal,
    pub products: Vec<OrderedProduct>,
}

impl Order {
    /// Builds a new order with a fresh id, the current UTC time and the total
    /// of `products`.
    pub fn place(account_id: AccountId, products: Vec<OrderedProduct>) -> Self {
        Self {
            id: OrderId::new(),
            created_at: Utc::now(),
            account_id,
            total_price: total_of(&products),
            products,
        }
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.products.iter().map(|p| &p.id)
    }
}

/// List filter for the order store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderQuery {
    ForAccount(AccountId),
}
