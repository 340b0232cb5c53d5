#![no_std]

//! Payee bookkeeping for the payment splitter.
//!
//! The registry is a plain value: the proxy stores it, the implementation
//! contract computes the next one. All checks that guard the payee set live
//! here so every implementation applies them the same way.

mod errors;
mod registry;
mod types;

pub use errors::SplitterError;
pub use types::{PayeeRegistry, Payout};
