use payee_registry::{PayeeRegistry, Payout, SplitterError};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, String, Vec};

contractmeta!(
    key = "Description",
    val = "Disperse: payment splitter logic with governed payee set"
);

/// Implementation generation reported to proxies.
pub const VERSION: u32 = 2;

/// Stateless logic behind a splitter proxy.
///
/// Every entry point takes the proxy's current registry and returns the next
/// one; nothing is written to this contract's storage.
#[contract]
pub struct Disperse;

#[contractimpl]
impl Disperse {
    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn setup(
        env: Env,
        payees: Vec<Address>,
        shares: Vec<u64>,
    ) -> Result<PayeeRegistry, SplitterError> {
        PayeeRegistry::new(&env, &payees, &shares)
    }

    pub fn migrate(env: Env, registry: PayeeRegistry, governance: Address) -> PayeeRegistry {
        let mut registry = registry;
        if registry.migrate(governance) {
            log!(&env, "governance installed by migration");
        }
        registry
    }

    pub fn add_payee(
        env: Env,
        registry: PayeeRegistry,
        caller: Address,
        account: Address,
        shares: u64,
    ) -> Result<PayeeRegistry, SplitterError> {
        let mut registry = registry;
        registry
            .add_payee(&caller, account, shares)
            .map_err(|err| rejected(&env, err))?;
        Ok(registry)
    }

    pub fn remove_payee(
        env: Env,
        registry: PayeeRegistry,
        caller: Address,
        account: Address,
        expected_shares: u64,
    ) -> Result<PayeeRegistry, SplitterError> {
        let mut registry = registry;
        registry
            .remove_payee(&caller, &account, expected_shares)
            .map_err(|err| rejected(&env, err))?;
        Ok(registry)
    }

    pub fn set_governance(
        env: Env,
        registry: PayeeRegistry,
        caller: Address,
        new_governance: Address,
    ) -> Result<PayeeRegistry, SplitterError> {
        let mut registry = registry;
        registry
            .set_governance(&caller, new_governance)
            .map_err(|err| rejected(&env, err))?;
        Ok(registry)
    }

    pub fn split(
        env: Env,
        registry: PayeeRegistry,
        amount: i128,
    ) -> Result<Vec<Payout>, SplitterError> {
        registry.split(&env, amount)
    }

    pub fn error_message(env: Env, error: SplitterError) -> String {
        error.message(&env)
    }
}

fn rejected(env: &Env, err: SplitterError) -> SplitterError {
    log!(env, "rejected", err.message(env));
    err
}
