//! Order entity - a composite owning its product lines

use crate::clone::DeepClone;

/// Leaf entity: one product line of an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_price: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> u32 {
        self.unit_price * self.quantity
    }
}

impl DeepClone for Product {
    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

/// Composite entity: an order owning zero or more products
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub products: Vec<Product>,
    pub delivery_cost: u32,
    pub payment_method: String,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Sum of all product lines plus delivery
    pub fn total(&self) -> u32 {
        self.products.iter().map(Product::line_total).sum::<u32>() + self.delivery_cost
    }
}

impl DeepClone for Order {
    fn deep_clone(&self) -> Self {
        Self {
            products: self.products.deep_clone(),
            delivery_cost: self.delivery_cost,
            payment_method: self.payment_method.clone(),
        }
    }
}
