use super::money::{Amount, Denomination};
use super::slot::CashSlot;
use super::withdrawal::WithdrawalOption;
use crate::error::Result;
use async_trait::async_trait;

/// Drives one cash machine on behalf of a front end.
///
/// Implementations decide how concurrent sessions are serialized; each call
/// must observe and leave the machine in a consistent state.
#[async_trait]
pub trait Teller: Send + Sync {
    async fn restock(&self, denomination: Denomination, count: u32) -> Result<()>;
    async fn withdrawal_options(&self, amount: Amount) -> Result<Vec<WithdrawalOption>>;
    async fn withdraw(&self, option: &WithdrawalOption) -> Result<()>;
    async fn slots(&self) -> Result<Vec<CashSlot>>;
    async fn total_cash_available(&self) -> Result<Amount>;
    async fn can_withdraw_anything(&self) -> Result<bool>;
}

pub type TellerBox = Box<dyn Teller>;

