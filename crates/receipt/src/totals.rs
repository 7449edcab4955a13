//! Pure derivation of per-line and grand totals.
//!
//! No stored state: callers recompute on every read, so totals can never go
//! stale with respect to the line-item collection. Accumulation is plain
//! `f64`; rounding happens only at display-formatting time
//! (`recibo_core::format_brl`).

use crate::line_item::LineItem;

/// Derived total of a single line.
pub fn line_total(item: &LineItem) -> f64 {
    item.quantity * item.unit_price
}

/// Sum of all line totals. Zero for an empty collection.
pub fn grand_total(items: &[LineItem]) -> f64 {
    items.iter().map(line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::{LineField, LineItemStore};

    #[test]
    fn empty_collection_totals_zero() {
        assert_eq!(grand_total(&[]), 0.0);
    }

    #[test]
    fn coerced_zero_quantity_zeroes_the_line() {
        let mut store = LineItemStore::new();
        let id = store.add_line();
        store.update_field(id, LineField::Quantity, "abc");
        store.update_field(id, LineField::UnitPrice, "2.5");

        assert_eq!(line_total(&store.items()[0]), 0.0);
        assert_eq!(grand_total(store.items()), 0.0);
    }

    #[test]
    fn grand_total_tracks_adds_updates_and_removals() {
        let mut store = LineItemStore::new();
        let first = store.add_line();
        store.update_field(first, LineField::UnitPrice, "10");
        store.update_field(first, LineField::Quantity, "3");
        assert_eq!(line_total(&store.items()[0]), 30.0);
        assert_eq!(grand_total(store.items()), 30.0);

        let second = store.add_line();
        store.update_field(second, LineField::UnitPrice, "5");
        assert_eq!(grand_total(store.items()), 35.0);

        store.remove_line(first);
        assert_eq!(grand_total(store.items()), 5.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add,
            UpdateQuantity(usize, String),
            UpdateUnitPrice(usize, String),
            Remove(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            let raw = prop_oneof![
                "[0-9]{1,4}",
                "[0-9]{1,3}\\.[0-9]{1,2}",
                Just(String::new()),
                "[a-z]{1,8}",
            ];
            prop_oneof![
                Just(Op::Add),
                (any::<usize>(), raw.clone()).prop_map(|(i, r)| Op::UpdateQuantity(i, r)),
                (any::<usize>(), raw).prop_map(|(i, r)| Op::UpdateUnitPrice(i, r)),
                any::<usize>().prop_map(Op::Remove),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: after any operation sequence, the grand total equals
            /// the sum of quantity * unit_price over the present items.
            #[test]
            fn grand_total_always_matches_the_item_sum(
                ops in proptest::collection::vec(op_strategy(), 0..40)
            ) {
                let mut store = LineItemStore::new();
                for op in ops {
                    match op {
                        Op::Add => {
                            store.add_line();
                        }
                        Op::UpdateQuantity(i, raw) => {
                            let id = store.items().get(i % store.len().max(1)).map(|item| item.id);
                            if let Some(id) = id {
                                store.update_field(id, LineField::Quantity, &raw);
                            }
                        }
                        Op::UpdateUnitPrice(i, raw) => {
                            let id = store.items().get(i % store.len().max(1)).map(|item| item.id);
                            if let Some(id) = id {
                                store.update_field(id, LineField::UnitPrice, &raw);
                            }
                        }
                        Op::Remove(i) => {
                            let id = store.items().get(i % store.len().max(1)).map(|item| item.id);
                            if let Some(id) = id {
                                store.remove_line(id);
                            }
                        }
                    }

                    let expected: f64 = store
                        .items()
                        .iter()
                        .map(|item| item.quantity * item.unit_price)
                        .sum();
                    prop_assert_eq!(grand_total(store.items()), expected);
                }
            }

            /// Property: removing one line never changes the totals of the
            /// remaining lines, and their ids survive intact.
            #[test]
            fn removal_does_not_disturb_other_lines(
                prices in proptest::collection::vec(0.0f64..1000.0, 2..10),
                victim in any::<usize>(),
            ) {
                let mut store = LineItemStore::new();
                for price in &prices {
                    let id = store.add_line();
                    store.update_field(id, LineField::UnitPrice, &price.to_string());
                }

                let victim_id = store.items()[victim % store.len()].id;
                let survivors: Vec<_> = store
                    .items()
                    .iter()
                    .filter(|item| item.id != victim_id)
                    .map(|item| (item.id, line_total(item)))
                    .collect();

                store.remove_line(victim_id);

                let after: Vec<_> = store
                    .items()
                    .iter()
                    .map(|item| (item.id, line_total(item)))
                    .collect();
                prop_assert_eq!(after, survivors);
            }
        }
    }
}
