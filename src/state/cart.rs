//! Shopping cart state

use uuid::Uuid;

/// Sample products offered by `add_sample_item`, in rotation
const SAMPLE_ITEMS: &[(&str, f64)] = &[
    ("Apple", 1500.0),
    ("Banana", 3000.0),
    ("Milk", 2500.0),
    ("Bread", 4000.0),
    ("Cereal", 6000.0),
];

/// Whole-won rendering, e.g. `1500₩`
pub fn format_won(amount: f64) -> String {
    format!("{amount:.0}₩")
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }

    pub fn formatted_price(&self) -> String {
        format_won(self.price)
    }
}

/// Cart contents with a running total
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
    total_price: f64,
    samples_added: usize,
}

impl ShoppingCart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn formatted_total(&self) -> String {
        format_won(self.total_price)
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
        self.recompute_total();
    }

    /// Remove the items at `indices`. Out-of-range indices are ignored.
    pub fn remove_items(&mut self, indices: &[usize]) {
        let mut index = 0;
        self.items.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        self.recompute_total();
    }

    /// Add the next product from the sample rotation
    pub fn add_sample_item(&mut self) {
        let (name, price) = SAMPLE_ITEMS[self.samples_added % SAMPLE_ITEMS.len()];
        self.samples_added += 1;
        self.add_item(CartItem::new(name, price));
    }

    fn recompute_total(&mut self) {
        self.total_price = self.items.iter().map(|item| item.price).sum();
    }
}
