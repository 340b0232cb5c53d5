//! Testing utilities for the upgradeable splitter
//! Fixed accounts, the upgraded-sink fixture and revert assertions

pub mod accounts;
pub mod legacy;
pub mod test_fixtures;

pub use accounts::*;
pub use assertions::*;
pub use legacy::*;
pub use test_fixtures::*;

/// Share layout of the live sink before any governance change
pub mod constants {
    pub const DFD_SHARES: u64 = 5_000;
    pub const BADGER_SHARES: u64 = 5_000;
}
