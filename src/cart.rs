//! Cart Operations
//!
//! Pure functions over the cart line list, plus conversion of a cart
//! snapshot into an order creation request. Persistence lives behind
//! [`crate::storage::CartRepository`]; reactive state lives in
//! [`crate::store`].

use thiserror::Error;

use crate::models::{CartLine, MenuItem, OrderCreate, OrderItem};

/// Local pre-flight validation failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderFormError {
    #[error("customer name is empty")]
    EmptyName,
    #[error("cart is empty")]
    EmptyCart,
}

/// Add one unit of a menu item: bump the quantity if the id is already
/// present, otherwise append a new line with quantity 1.
pub fn add_line(lines: &mut Vec<CartLine>, item: &MenuItem) {
    match lines.iter_mut().find(|line| line.id == item.id) {
        Some(line) => line.quantity += 1,
        None => lines.push(CartLine::from_item(item)),
    }
}

/// Adjust a line's quantity by `delta`, clamping at zero. A line that
/// reaches zero is removed. Unknown ids are a no-op.
pub fn adjust_quantity(lines: &mut Vec<CartLine>, item_id: &str, delta: i32) {
    if let Some(line) = lines.iter_mut().find(|line| line.id == item_id) {
        line.quantity = line.quantity.saturating_add_signed(delta);
    }
    lines.retain(|line| line.quantity > 0);
}

/// Remove a line regardless of quantity
pub fn remove_line(lines: &mut Vec<CartLine>, item_id: &str) {
    lines.retain(|line| line.id != item_id);
}

/// Quantity currently in the cart for a menu item id
pub fn line_quantity(lines: &[CartLine], item_id: &str) -> u32 {
    lines
        .iter()
        .find(|line| line.id == item_id)
        .map(|line| line.quantity)
        .unwrap_or(0)
}

/// Sum of price × quantity over all lines
pub fn cart_total(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .map(|line| line.price * i64::from(line.quantity))
        .sum()
}

/// Total unit count, shown on the floating cart button
pub fn cart_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Build an order creation request from the cart snapshot.
///
/// The total is denormalized client-side; the backend checks it against
/// the line sum. A blank table number becomes `None`.
pub fn build_order_request(
    customer_name: &str,
    table_number: &str,
    lines: &[CartLine],
) -> Result<OrderCreate, OrderFormError> {
    let name = customer_name.trim();
    if name.is_empty() {
        return Err(OrderFormError::EmptyName);
    }
    if lines.is_empty() {
        return Err(OrderFormError::EmptyCart);
    }

    let table = table_number.trim();
    Ok(OrderCreate {
        customer_name: name.to_string(),
        table_number: (!table.is_empty()).then(|| table.to_string()),
        items: lines
            .iter()
            .map(|line| OrderItem {
                menu_item_id: line.id.clone(),
                name: line.name.clone(),
                price: line.price,
                quantity: line.quantity,
            })
            .collect(),
        total: cart_total(lines),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuCategory;
    use proptest::prelude::*;

    fn make_item(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: MenuCategory::Food,
            price,
            image_url: String::new(),
            description: String::new(),
            available: true,
        }
    }

    #[test]
    fn test_add_line_increments_existing() {
        let mut lines = Vec::new();
        let item = make_item("a", 10000);
        add_line(&mut lines, &item);
        add_line(&mut lines, &item);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_removes_at_zero() {
        let mut lines = Vec::new();
        add_line(&mut lines, &make_item("a", 10000));
        adjust_quantity(&mut lines, "a", 2);
        assert_eq!(line_quantity(&lines, "a"), 3);
        adjust_quantity(&mut lines, "a", -3);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_adjust_quantity_clamps_below_zero() {
        let mut lines = Vec::new();
        add_line(&mut lines, &make_item("a", 10000));
        adjust_quantity(&mut lines, "a", -5);
        assert!(lines.is_empty());
        // unknown id is a no-op
        adjust_quantity(&mut lines, "b", 1);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_remove_line() {
        let mut lines = Vec::new();
        add_line(&mut lines, &make_item("a", 10000));
        add_line(&mut lines, &make_item("b", 5000));
        remove_line(&mut lines, "a");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "b");
    }

    #[test]
    fn test_total_scenario() {
        // cart = [{a, 15000 x2}, {b, 8000 x1}] -> 38000
        let mut lines = Vec::new();
        add_line(&mut lines, &make_item("a", 15000));
        adjust_quantity(&mut lines, "a", 1);
        add_line(&mut lines, &make_item("b", 8000));
        assert_eq!(cart_total(&lines), 38000);
        assert_eq!(cart_count(&lines), 3);
    }

    #[test]
    fn test_build_order_request_rejects_empty_name() {
        let mut lines = Vec::new();
        add_line(&mut lines, &make_item("a", 15000));
        assert_eq!(
            build_order_request("   ", "", &lines),
            Err(OrderFormError::EmptyName)
        );
    }

    #[test]
    fn test_build_order_request_rejects_empty_cart() {
        assert_eq!(
            build_order_request("Budi", "Meja 5", &[]),
            Err(OrderFormError::EmptyCart)
        );
    }

    #[test]
    fn test_build_order_request_snapshot() {
        let mut lines = Vec::new();
        add_line(&mut lines, &make_item("a", 15000));
        adjust_quantity(&mut lines, "a", 1);
        add_line(&mut lines, &make_item("b", 8000));

        let req = build_order_request(" Budi ", "", &lines).unwrap();
        assert_eq!(req.customer_name, "Budi");
        assert_eq!(req.table_number, None);
        assert_eq!(req.total, 38000);
        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0].quantity, 2);

        let with_table = build_order_request("Budi", "Meja 3", &lines).unwrap();
        assert_eq!(with_table.table_number, Some("Meja 3".to_string()));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Adjust(usize, i32),
        Remove(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..3).prop_map(Op::Add),
            ((0usize..3), (-4i32..4)).prop_map(|(i, d)| Op::Adjust(i, d)),
            (0usize..3).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn cart_invariants_hold(ops in proptest::collection::vec(op_strategy(), 0..50)) {
            let catalog = [
                make_item("a", 15000),
                make_item("b", 8000),
                make_item("c", 12000),
            ];
            let mut lines = Vec::new();
            for op in ops {
                match op {
                    Op::Add(i) => add_line(&mut lines, &catalog[i]),
                    Op::Adjust(i, d) => adjust_quantity(&mut lines, &catalog[i].id, d),
                    Op::Remove(i) => remove_line(&mut lines, &catalog[i].id),
                }
                // surviving lines always carry a positive quantity
                prop_assert!(lines.iter().all(|l| l.quantity > 0));
                // no duplicate ids
                for (n, line) in lines.iter().enumerate() {
                    prop_assert!(lines[n + 1..].iter().all(|o| o.id != line.id));
                }
                // total is always the line sum
                let expected: i64 = lines
                    .iter()
                    .map(|l| l.price * i64::from(l.quantity))
                    .sum();
                prop_assert_eq!(cart_total(&lines), expected);
            }
        }
    }
}
