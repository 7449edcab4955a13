use serde::{Deserialize, Serialize};

use recibo_core::LineItemId;

/// Mutable fields of a line item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineField {
    Description,
    Quantity,
    UnitPrice,
}

/// One priced row of the receipt.
///
/// `quantity` and `unit_price` are non-negative; the line total is derived
/// (see [`crate::totals`]), never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    fn empty() -> Self {
        Self {
            id: LineItemId::new(),
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
        }
    }
}

/// Parse-or-zero coercion for numeric field input.
///
/// Empty, non-numeric, non-finite and out-of-domain (negative) input all
/// coerce to zero; numeric entry never rejects and never errors.
pub(crate) fn coerce_number(raw: &str) -> f64 {
    let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_finite() && parsed >= 0.0 {
        parsed
    } else {
        0.0
    }
}

/// Ordered collection of line items.
///
/// Insertion order is the display/print order; ids are unique for the
/// collection's lifetime and never reused after removal. An empty collection
/// is a valid zero-line receipt.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineItemStore {
    items: Vec<LineItem>,
}

impl LineItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh default line (`quantity = 1`, `unit_price = 0`, empty
    /// description) and return its id.
    pub fn add_line(&mut self) -> LineItemId {
        let item = LineItem::empty();
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Update one field of the line with the given id.
    ///
    /// Numeric fields coerce via parse-or-zero; the description is stored
    /// verbatim. An absent id is a logged no-op, since ids are only ever
    /// referenced from currently-rendered rows.
    pub fn update_field(&mut self, id: LineItemId, field: LineField, raw: &str) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(%id, ?field, "update for unknown line item ignored");
            return;
        };

        match field {
            LineField::Description => item.description = raw.to_string(),
            LineField::Quantity => item.quantity = coerce_number(raw),
            LineField::UnitPrice => item.unit_price = coerce_number(raw),
        }
    }

    /// Remove the line with the given id; a no-op if absent.
    pub fn remove_line(&mut self, id: LineItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            tracing::debug!(%id, "removal of unknown line item ignored");
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_line_uses_defaults() {
        let mut store = LineItemStore::new();
        let id = store.add_line();

        let item = &store.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.description, "");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit_price, 0.0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = LineItemStore::new();
        let a = store.add_line();
        let b = store.add_line();
        let c = store.add_line();

        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b, c]);

        store.remove_line(b);
        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn update_coerces_numeric_garbage_to_zero() {
        let mut store = LineItemStore::new();
        let id = store.add_line();

        store.update_field(id, LineField::Quantity, "abc");
        store.update_field(id, LineField::UnitPrice, "2.5");

        let item = &store.items()[0];
        assert_eq!(item.quantity, 0.0);
        assert_eq!(item.unit_price, 2.5);
    }

    #[test]
    fn empty_and_negative_input_coerce_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number("-3"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number(" 4.25 "), 4.25);
    }

    #[test]
    fn description_is_stored_verbatim() {
        let mut store = LineItemStore::new();
        let id = store.add_line();
        store.update_field(id, LineField::Description, "  Cimento 50kg  ");
        assert_eq!(store.items()[0].description, "  Cimento 50kg  ");
    }

    #[test]
    fn mutations_on_unknown_ids_are_noops() {
        let mut store = LineItemStore::new();
        let id = store.add_line();
        store.update_field(id, LineField::UnitPrice, "10");

        let ghost = LineItemId::new();
        store.update_field(ghost, LineField::UnitPrice, "999");
        store.remove_line(ghost);

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].unit_price, 10.0);
    }

    #[test]
    fn removing_a_line_leaves_others_untouched() {
        let mut store = LineItemStore::new();
        let a = store.add_line();
        let b = store.add_line();
        store.update_field(a, LineField::UnitPrice, "3");
        store.update_field(b, LineField::UnitPrice, "7");

        store.remove_line(a);

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].id, b);
        assert_eq!(store.items()[0].unit_price, 7.0);
    }

    #[test]
    fn collection_may_become_empty() {
        let mut store = LineItemStore::new();
        let id = store.add_line();
        store.remove_line(id);
        assert!(store.is_empty());
    }
}
