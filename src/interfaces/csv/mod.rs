//! CSV adapters: operation scripts in, slot reports out.

pub mod operation_reader;
pub mod slot_writer;
