#![no_std]

mod contract;

pub use contract::{Disperse, DisperseClient, VERSION};
pub use payee_registry::{PayeeRegistry, Payout, SplitterError};
