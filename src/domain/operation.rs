use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Sets the bill count of the denomination in `value`.
    Restock,
    /// Lists the withdrawal options for the amount in `value`.
    Options,
    /// Pays out the amount in `value` using the option numbered `quantity`.
    Withdraw,
}

/// One row of an operation script.
///
/// `value` is a denomination for restocks and an amount otherwise. `quantity`
/// is the bill count for restocks and the 1-based option choice for
/// withdrawals.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Operation {
    pub r#type: OperationType,
    pub value: Decimal,
    pub quantity: Option<u32>,
}
