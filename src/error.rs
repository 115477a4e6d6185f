use crate::domain::money::Denomination;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum AtmError {
    #[error("Unsupported denomination: {0}")]
    #[diagnostic(
        code(atm::unsupported_denomination),
        help("the machine only stocks the denominations it was built with")
    )]
    UnsupportedDenomination(Denomination),

    #[error("Insufficient stock for {denomination}: available {available}, requested {requested}")]
    #[diagnostic(code(atm::insufficient_stock))]
    InsufficientStock {
        denomination: Denomination,
        available: u32,
        requested: u32,
    },

    #[error("Validation error: {0}")]
    #[diagnostic(code(atm::validation))]
    Validation(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(atm::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(atm::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AtmError>;
