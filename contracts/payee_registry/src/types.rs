use soroban_sdk::{contracttype, Address, Map, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PayeeRegistry {
    pub payees: Vec<Address>,
    pub shares: Map<Address, u64>,
    pub total_shares: u64,
    /// Unset until an implementation that knows about governance migrates
    /// the registry.
    pub governance: Option<Address>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Payout {
    pub account: Address,
    pub amount: i128,
}
