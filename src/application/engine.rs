use crate::domain::money::{Amount, Denomination};
use crate::domain::operation::{Operation, OperationType};
use crate::domain::ports::TellerBox;
use crate::domain::slot::CashSlot;
use crate::domain::withdrawal::WithdrawalOption;
use crate::error::{AtmError, Result};
use std::fmt;

/// The result of one successfully processed operation.
#[derive(Debug, Clone)]
pub enum Outcome {
    Restocked {
        denomination: Denomination,
        count: u32,
    },
    Options {
        amount: Amount,
        options: Vec<WithdrawalOption>,
    },
    Withdrawn(WithdrawalOption),
    /// No combination of the current stock pays out the amount.
    NoOptions(Amount),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Restocked {
                denomination,
                count,
            } => write!(f, "Restocked {denomination} (quantity: {count})"),
            Outcome::Options { amount, options } => {
                write!(f, "Options for {amount}:")?;
                for (index, option) in options.iter().enumerate() {
                    write!(f, "\n  {}) {option}", index + 1)?;
                }
                Ok(())
            }
            Outcome::Withdrawn(option) => write!(f, "Withdrew {option}"),
            Outcome::NoOptions(amount) => {
                write!(f, "No withdrawal options available for {amount}")
            }
        }
    }
}

/// Applies script operations to a cash machine.
///
/// The engine owns the teller it drives. Operations are processed one at a
/// time, in the order they are submitted.
pub struct AtmEngine {
    teller: TellerBox,
}

impl AtmEngine {
    /// Creates a new `AtmEngine` driving `teller`.
    pub fn new(teller: TellerBox) -> Self {
        Self { teller }
    }

    /// Processes one operation.
    ///
    /// Rejected operations return an error and leave the machine unchanged.
    /// An amount nothing can pay out is not an error; it yields
    /// [`Outcome::NoOptions`].
    pub async fn process_operation(&self, op: Operation) -> Result<Outcome> {
        tracing::debug!(kind = ?op.r#type, value = %op.value, quantity = ?op.quantity, "processing operation");
        match op.r#type {
            OperationType::Restock => {
                let denomination = Denomination::try_from(op.value)?;
                let count = op.quantity.ok_or_else(|| {
                    AtmError::Validation(format!("Restock of {denomination} is missing a count"))
                })?;
                self.teller.restock(denomination, count).await?;
                Ok(Outcome::Restocked {
                    denomination,
                    count,
                })
            }
            OperationType::Options => {
                let amount = Amount::try_from(op.value)?;
                let options = self.teller.withdrawal_options(amount).await?;
                if options.is_empty() {
                    return Ok(Outcome::NoOptions(amount));
                }
                Ok(Outcome::Options { amount, options })
            }
            OperationType::Withdraw => {
                let amount = Amount::try_from(op.value)?;
                let choice = op.quantity.unwrap_or(1);
                let mut options = self.teller.withdrawal_options(amount).await?;
                if options.is_empty() {
                    return Ok(Outcome::NoOptions(amount));
                }
                let index = usize::try_from(choice)
                    .ok()
                    .and_then(|choice| choice.checked_sub(1))
                    .filter(|index| *index < options.len())
                    .ok_or_else(|| {
                        AtmError::Validation(format!(
                            "Option {choice} does not exist; {} options are available for {amount}",
                            options.len()
                        ))
                    })?;
                let option = options.swap_remove(index);
                self.teller.withdraw(&option).await?;
                Ok(Outcome::Withdrawn(option))
            }
        }
    }

    /// Consumes the engine and returns the final state of every slot.
    pub async fn into_report(self) -> Result<Vec<CashSlot>> {
        self.teller.slots().await
    }
}
