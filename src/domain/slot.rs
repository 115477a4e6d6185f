use super::money::{Amount, Denomination};
use crate::error::{AtmError, Result};
use std::fmt;

/// The stock of bills for one denomination.
#[derive(Debug, Clone, PartialEq)]
pub struct CashSlot {
    denomination: Denomination,
    count: u32,
}

impl CashSlot {
    /// Creates an empty slot.
    pub fn new(denomination: Denomination) -> Self {
        Self {
            denomination,
            count: 0,
        }
    }

    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Replaces the bill count. Restocking is absolute, not additive.
    pub fn restock(&mut self, count: u32) {
        self.count = count;
    }

    pub fn can_dispense(&self, count: u32) -> bool {
        count <= self.count
    }

    /// Removes `count` bills, leaving the slot untouched if it holds fewer.
    pub fn dispense(&mut self, count: u32) -> Result<()> {
        self.count = self
            .count
            .checked_sub(count)
            .ok_or(AtmError::InsufficientStock {
                denomination: self.denomination,
                available: self.count,
                requested: count,
            })?;
        Ok(())
    }

    pub fn total_value(&self) -> Amount {
        self.denomination.amount() * self.count
    }
}

impl fmt::Display for CashSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slot {} - Quantity: {} - Total: {}",
            self.denomination,
            self.count,
            self.total_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(units: u32, count: u32) -> CashSlot {
        let mut slot = CashSlot::new(Denomination::whole(units));
        slot.restock(count);
        slot
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = CashSlot::new(Denomination::whole(20));
        assert_eq!(slot.count(), 0);
        assert_eq!(slot.denomination(), Denomination::whole(20));
        assert!(slot.total_value().is_approx_zero());
    }

    #[test]
    fn test_restock_is_absolute() {
        let mut slot = slot(100, 5);
        slot.restock(2);
        assert_eq!(slot.count(), 2);
        assert!(slot.total_value().approx_eq(Amount::new(200.0)));
    }

    #[test]
    fn test_dispense() {
        let mut slot = slot(100, 5);
        slot.dispense(2).unwrap();
        assert_eq!(slot.count(), 3);
        assert!(slot.total_value().approx_eq(Amount::new(300.0)));

        slot.dispense(3).unwrap();
        assert_eq!(slot.count(), 0);
    }

    #[test]
    fn test_dispense_more_than_available() {
        let mut slot = slot(20, 3);
        let result = slot.dispense(5);
        assert!(matches!(
            result,
            Err(AtmError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            })
        ));
        assert_eq!(slot.count(), 3);
    }

    #[test]
    fn test_can_dispense() {
        let slot = slot(50, 4);
        assert!(slot.can_dispense(0));
        assert!(slot.can_dispense(3));
        assert!(slot.can_dispense(4));
        assert!(!slot.can_dispense(5));
    }

    #[test]
    fn test_display() {
        let slot = slot(100, 5);
        assert_eq!(
            slot.to_string(),
            "Slot R$ 100,00 - Quantity: 5 - Total: R$ 500,00"
        );
    }
}
