//! Domain model of the cash machine: money, slots, withdrawal options and the
//! inventory that searches and dispenses them.

pub mod machine;
pub mod money;
pub mod operation;
pub mod ports;
pub mod slot;
pub mod withdrawal;
