//! Application layer: applies script operations to a teller.
//!
//! `AtmEngine` is the entry point used by the CLI. It only talks to the
//! machine through the [`Teller`](crate::domain::ports::Teller) port.

pub mod engine;
