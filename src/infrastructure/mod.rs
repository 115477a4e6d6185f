//! Adapters that hold a machine and expose it through the domain ports.

pub mod in_memory;
