use super::money::{Amount, Denomination};
use super::slot::CashSlot;
use super::withdrawal::WithdrawalOption;
use crate::error::{AtmError, Result};
use std::collections::HashSet;

/// Upper bound on the options a single search yields.
pub const MAX_WITHDRAWAL_OPTIONS: usize = 3;

/// Denominations of the standard machine, in construction order.
pub const STANDARD_DENOMINATIONS: [u32; 3] = [100, 50, 20];

/// The cash inventory of one teller machine.
///
/// Holds exactly one [`CashSlot`] per supported denomination, in the order the
/// denominations were given at construction. The set of denominations never
/// changes afterwards.
///
/// The machine does no locking of its own: mutating operations take `&mut self`
/// and a running search borrows it immutably, so callers sharing a machine
/// across sessions must serialize access themselves.
#[derive(Debug, Clone)]
pub struct AtmMachine {
    slots: Vec<CashSlot>,
}

impl AtmMachine {
    /// Creates a machine with one empty slot per denomination.
    ///
    /// Fails if the list is empty or names the same denomination twice.
    pub fn new(denominations: impl IntoIterator<Item = Denomination>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut slots = Vec::new();
        for denomination in denominations {
            if !seen.insert(denomination) {
                return Err(AtmError::Validation(format!(
                    "Denomination {denomination} is listed more than once"
                )));
            }
            slots.push(CashSlot::new(denomination));
        }
        if slots.is_empty() {
            return Err(AtmError::Validation(
                "At least one denomination is required".to_string(),
            ));
        }
        Ok(Self { slots })
    }

    /// A machine stocking 100, 50 and 20 bills.
    pub fn standard() -> Self {
        Self {
            slots: STANDARD_DENOMINATIONS
                .into_iter()
                .map(|units| CashSlot::new(Denomination::whole(units)))
                .collect(),
        }
    }

    pub fn supported_denominations(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.slots.iter().map(CashSlot::denomination)
    }

    pub fn slots(&self) -> &[CashSlot] {
        &self.slots
    }

    pub fn slot(&self, denomination: Denomination) -> Option<&CashSlot> {
        self.slots
            .iter()
            .find(|slot| slot.denomination() == denomination)
    }

    fn slot_mut(&mut self, denomination: Denomination) -> Result<&mut CashSlot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.denomination() == denomination)
            .ok_or(AtmError::UnsupportedDenomination(denomination))
    }

    /// Sets the bill count of one denomination.
    pub fn restock(&mut self, denomination: Denomination, count: u32) -> Result<()> {
        self.slot_mut(denomination)?.restock(count);
        Ok(())
    }

    pub fn total_cash_available(&self) -> Amount {
        self.slots.iter().map(CashSlot::total_value).sum()
    }

    pub fn can_withdraw_anything(&self) -> bool {
        self.slots.iter().any(|slot| slot.count() > 0)
    }

    fn smallest_denomination(&self) -> Option<Denomination> {
        self.supported_denominations().min()
    }

    /// Searches the current stock for ways to pay out `amount`.
    ///
    /// Options are found by backtracking over the denominations from largest to
    /// smallest, trying 0, 1, 2... bills of each up to the slot's count, and are
    /// yielded in that discovery order. The search stops after
    /// [`MAX_WITHDRAWAL_OPTIONS`] options. Amounts below the smallest supported
    /// denomination yield nothing.
    pub fn valid_withdrawal_options(&self, amount: Amount) -> WithdrawalOptions<'_> {
        let mut levels: Vec<&CashSlot> = self.slots.iter().collect();
        levels.sort_by(|a, b| b.denomination().cmp(&a.denomination()));

        let reachable = self
            .smallest_denomination()
            .is_some_and(|smallest| amount.value() >= smallest.amount().value());

        let stack = if reachable {
            vec![Frame {
                level: 0,
                remaining: amount,
                next_quantity: 0,
            }]
        } else {
            Vec::new()
        };

        WithdrawalOptions {
            quantities: vec![0; levels.len()],
            levels,
            stack,
            yielded: 0,
        }
    }

    /// Pays out `option`, all or nothing.
    ///
    /// Every denomination in the combination is checked against its slot before
    /// any slot is touched; if one check fails the machine is left unchanged.
    pub fn withdraw(&mut self, option: &WithdrawalOption) -> Result<()> {
        for (&denomination, &count) in option.combination() {
            let slot = self
                .slot(denomination)
                .ok_or(AtmError::UnsupportedDenomination(denomination))?;
            if !slot.can_dispense(count) {
                return Err(AtmError::InsufficientStock {
                    denomination,
                    available: slot.count(),
                    requested: count,
                });
            }
        }

        for (&denomination, &count) in option.combination() {
            self.slot_mut(denomination)?.dispense(count)?;
        }
        Ok(())
    }
}

/// One level of the backtracking search: the denomination being tried and
/// what is left to pay once the larger denominations are committed.
#[derive(Debug, Clone, Copy)]
struct Frame {
    level: usize,
    remaining: Amount,
    next_quantity: u64,
}

/// Lazy sequence of withdrawal options for one amount.
///
/// Returned by [`AtmMachine::valid_withdrawal_options`]. It borrows the machine,
/// so stock cannot change while the search is in progress.
#[derive(Debug)]
pub struct WithdrawalOptions<'a> {
    levels: Vec<&'a CashSlot>,
    quantities: Vec<u32>,
    stack: Vec<Frame>,
    yielded: usize,
}

impl WithdrawalOptions<'_> {
    fn current_option(&self, up_to: usize) -> WithdrawalOption {
        WithdrawalOption::new(
            self.levels[..=up_to]
                .iter()
                .zip(&self.quantities)
                .map(|(slot, &count)| (slot.denomination(), count)),
        )
    }

    fn backtrack(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.quantities[frame.level] = 0;
        }
    }
}

impl Iterator for WithdrawalOptions<'_> {
    type Item = WithdrawalOption;

    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded >= MAX_WITHDRAWAL_OPTIONS {
            self.stack.clear();
            return None;
        }

        while let Some(frame) = self.stack.last_mut() {
            let slot = self.levels[frame.level];
            let quantity = match u32::try_from(frame.next_quantity) {
                Ok(quantity) if quantity <= slot.count() => quantity,
                _ => {
                    self.backtrack();
                    continue;
                }
            };
            frame.next_quantity += 1;
            let remaining = frame.remaining - slot.denomination().amount() * quantity;
            // Every further bill of this denomination only overshoots more.
            if remaining.value() < -Amount::EPSILON {
                self.backtrack();
                continue;
            }
            let level = frame.level;
            self.quantities[level] = quantity;

            if remaining.is_approx_zero() {
                self.yielded += 1;
                return Some(self.current_option(level));
            }
            if remaining.value() < 0.0 || level + 1 >= self.levels.len() {
                continue;
            }
            self.stack.push(Frame {
                level: level + 1,
                remaining,
                next_quantity: 0,
            });
        }
        None
    }
}

impl std::iter::FusedIterator for WithdrawalOptions<'_> {}
