//! Implementation the live sink ran before Disperse: a fixed payee set with
//! no governance, so it can only pay out.
use payee_registry::{PayeeRegistry, Payout, SplitterError};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub const LEGACY_VERSION: u32 = 1;

#[contract]
pub struct LegacySplitter;

#[contractimpl]
impl LegacySplitter {
    pub fn version(_env: Env) -> u32 {
        LEGACY_VERSION
    }

    pub fn setup(
        env: Env,
        payees: Vec<Address>,
        shares: Vec<u64>,
    ) -> Result<PayeeRegistry, SplitterError> {
        PayeeRegistry::new(&env, &payees, &shares)
    }

    // no governance to install
    pub fn migrate(_env: Env, registry: PayeeRegistry, _governance: Address) -> PayeeRegistry {
        registry
    }

    pub fn add_payee(
        _env: Env,
        _registry: PayeeRegistry,
        _caller: Address,
        _account: Address,
        _shares: u64,
    ) -> Result<PayeeRegistry, SplitterError> {
        Err(SplitterError::NotGovernance)
    }

    pub fn remove_payee(
        _env: Env,
        _registry: PayeeRegistry,
        _caller: Address,
        _account: Address,
        _expected_shares: u64,
    ) -> Result<PayeeRegistry, SplitterError> {
        Err(SplitterError::NotGovernance)
    }

    pub fn set_governance(
        _env: Env,
        _registry: PayeeRegistry,
        _caller: Address,
        _new_governance: Address,
    ) -> Result<PayeeRegistry, SplitterError> {
        Err(SplitterError::NotGovernance)
    }

    pub fn split(
        env: Env,
        registry: PayeeRegistry,
        amount: i128,
    ) -> Result<Vec<Payout>, SplitterError> {
        registry.split(&env, amount)
    }
}
