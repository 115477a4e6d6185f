use crate::domain::machine::AtmMachine;
use crate::domain::money::{Amount, Denomination};
use crate::domain::ports::Teller;
use crate::domain::slot::CashSlot;
use crate::domain::withdrawal::WithdrawalOption;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A teller over a machine held in memory.
///
/// Uses `Arc<Mutex<AtmMachine>>` so clones share one machine. Every call holds
/// the lock for its whole duration, which makes a withdrawal's check and
/// dispense a single step as seen by other sessions.
#[derive(Clone)]
pub struct InMemoryTeller {
    machine: Arc<Mutex<AtmMachine>>,
}

impl InMemoryTeller {
    pub fn new(machine: AtmMachine) -> Self {
        Self {
            machine: Arc::new(Mutex::new(machine)),
        }
    }
}

impl Default for InMemoryTeller {
    fn default() -> Self {
        Self::new(AtmMachine::standard())
    }
}

#[async_trait]
impl Teller for InMemoryTeller {
    async fn restock(&self, denomination: Denomination, count: u32) -> Result<()> {
        let mut machine = self.machine.lock().await;
        machine.restock(denomination, count)?;
        tracing::info!(%denomination, count, "slot restocked");
        Ok(())
    }

    async fn withdrawal_options(&self, amount: Amount) -> Result<Vec<WithdrawalOption>> {
        let machine = self.machine.lock().await;
        let options: Vec<WithdrawalOption> = machine.valid_withdrawal_options(amount).collect();
        tracing::debug!(%amount, found = options.len(), "searched withdrawal options");
        Ok(options)
    }

    async fn withdraw(&self, option: &WithdrawalOption) -> Result<()> {
        let mut machine = self.machine.lock().await;
        machine.withdraw(option)?;
        tracing::info!(
            amount = %option.total_amount(),
            bills = option.bill_count(),
            remaining = %machine.total_cash_available(),
            "withdrawal dispensed"
        );
        Ok(())
    }

    async fn slots(&self) -> Result<Vec<CashSlot>> {
        let machine = self.machine.lock().await;
        Ok(machine.slots().to_vec())
    }

    async fn total_cash_available(&self) -> Result<Amount> {
        let machine = self.machine.lock().await;
        Ok(machine.total_cash_available())
    }

    async fn can_withdraw_anything(&self) -> Result<bool> {
        let machine = self.machine.lock().await;
        Ok(machine.can_withdraw_anything())
    }
}
