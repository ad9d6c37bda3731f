use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::menu::FlattenedMenuEntry;

/// Quantity used when the customer's answer isn't a number.
pub const DEFAULT_QUANTITY: u64 = 1;

#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    #[error("{quantity} x {name} at ${price} is too large to price")]
    LineOverflow {
        name: String,
        price: Decimal,
        quantity: u64,
    },

    #[error("Order total is too large to price")]
    TotalOverflow,
}

/// One recorded purchase. Never mutated once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Price snapshot taken from the menu at selection time.
    pub fn from_entry(entry: &FlattenedMenuEntry, quantity: u64) -> Self {
        Self::new(entry.display_name(), entry.price, quantity)
    }

    pub fn subtotal(&self) -> Result<Decimal, OrderError> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| OrderError::LineOverflow {
                name: self.name.clone(),
                price: self.price,
                quantity: self.quantity,
            })
    }
}

/// Line items in the order they were placed. Append-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    items: Vec<LineItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeated selections of the same item stay separate lines.
    ///
    /// An item is refused when it would leave the order impossible to
    /// total; the order is unchanged in that case.
    pub fn push(&mut self, item: LineItem) -> Result<(), OrderError> {
        let subtotal = item.subtotal()?;
        self.unrounded_total()?
            .checked_add(subtotal)
            .ok_or(OrderError::TotalOverflow)?;

        self.items.push(item);
        Ok(())
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

    /// Sum of price x quantity, rounded to cents.
    pub fn total(&self) -> Result<Decimal, OrderError> {
        Ok(self.unrounded_total()?.round_dp(2))
    }

    fn unrounded_total(&self) -> Result<Decimal, OrderError> {
        self.items.iter().try_fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.subtotal()?)
                .ok_or(OrderError::TotalOverflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_order_total_is_zero() {
        assert_eq!(Order::new().total(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let mut order = Order::new();
        order.push(LineItem::new("Burrito - Chicken", dec!(4.49), 2)).unwrap();
        order.push(LineItem::new("Sushi - California Roll", dec!(7.49), 1)).unwrap();

        assert_eq!(order.total(), Ok(dec!(16.47)));
    }

    #[test]
    fn test_total_rounds_to_cents() {
        let mut order = Order::new();
        order.push(LineItem::new("Tea", dec!(0.333), 3)).unwrap();

        assert_eq!(order.total(), Ok(dec!(1.00)));
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let mut order = Order::new();
        order.push(LineItem::new("Pie - Apple", dec!(4.99), 0)).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.total(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_repeated_items_are_not_merged() {
        let mut order = Order::new();
        order.push(LineItem::new("Burrito - Beef", dec!(5.49), 2)).unwrap();
        order.push(LineItem::new("Burrito - Beef", dec!(5.49), 3)).unwrap();

        let quantities: Vec<u64> = order.items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![2, 3]);
        assert_eq!(order.total(), Ok(dec!(27.45)));
    }

    #[test]
    fn test_large_quantity_is_priced_exactly() {
        let mut order = Order::new();
        order.push(LineItem::new("Burrito - Chicken", dec!(4.49), 99_999_999_999)).unwrap();

        assert_eq!(order.total(), Ok(dec!(448999999995.51)));
    }

    #[test]
    fn test_overflowing_line_is_refused() {
        let mut order = Order::new();
        let item = LineItem::new("Gold - Bar", dec!(100000000000000000000), 4_294_967_295);

        assert!(matches!(item.subtotal(), Err(OrderError::LineOverflow { .. })));
        assert!(matches!(order.push(item), Err(OrderError::LineOverflow { .. })));
        assert!(order.is_empty());
        assert_eq!(order.total(), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_overflowing_total_is_refused() {
        let mut order = Order::new();
        let big = LineItem::new("Gold - Bar", dec!(50000000000000000000000000000), 1);

        order.push(big.clone()).unwrap();
        assert_eq!(order.push(big), Err(OrderError::TotalOverflow));
        assert_eq!(order.len(), 1);
    }
}
