#![no_std]

//! Upgradeable payment-splitter proxy.
//!
//! The proxy owns the payee registry and the token balances. Logic lives in
//! a separate implementation contract whose address sits in the
//! implementation slot; every mutation sends the current registry to that
//! contract and stores whatever it returns. Swapping the slot therefore
//! swaps the rules without touching stored state.

mod errors;
mod events;
mod implementation;
mod storage;

pub use errors::ProxyError;
pub use implementation::{Implementation, ImplementationClient};
pub use upgradeability::storage::IMPLEMENTATION_SLOT;
pub use upgradeability::UpgradeHistory;

use implementation::{lift, lift_infallible};
use payee_registry::{PayeeRegistry, SplitterError};
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, Env, Vec,
};
use upgradeability::storage as up_storage;

#[contract]
pub struct SplitterProxy;

#[contractimpl]
impl SplitterProxy {
    pub fn initialize(
        env: Env,
        admin: Address,
        implementation: Address,
        payees: Vec<Address>,
        shares: Vec<u64>,
    ) -> Result<(), ProxyError> {
        admin.require_auth();
        if storage::get_registry(&env).is_some() {
            return Err(ProxyError::AlreadyInitialized);
        }

        let registry = lift(
            ImplementationClient::new(&env, &implementation).try_setup(&payees, &shares),
        )?;
        upgradeability::init(&env, &admin, &implementation)?;
        storage::set_registry(&env, &registry);

        events::initialized(&env, &admin, &implementation, registry.total_shares);
        Ok(())
    }

    // ==================== Upgrade ====================

    /// Points the proxy at `new_implementation` and lets it migrate the
    /// stored registry, installing `governance` if none is set yet.
    ///
    /// The new implementation must report a version at least as high as the
    /// current one.
    pub fn upgrade(
        env: Env,
        new_implementation: Address,
        governance: Address,
    ) -> Result<u32, ProxyError> {
        let registry = Self::registry(&env)?;

        let current = lift_infallible(Self::logic(&env)?.try_version())?;
        let incoming = lift_infallible(
            ImplementationClient::new(&env, &new_implementation).try_version(),
        )?;
        if incoming < current {
            log!(&env, "downgrade refused", current, incoming);
            return Err(ProxyError::IncompatibleVersion);
        }

        let version =
            upgradeability::execute_upgrade(&env, &new_implementation, symbol_short!("upgrade"))?;

        let migrated = lift_infallible(
            ImplementationClient::new(&env, &new_implementation)
                .try_migrate(&registry, &governance),
        )?;
        if migrated.governance != registry.governance {
            if let Some(gov) = &migrated.governance {
                events::governance_changed(&env, gov);
            }
        }
        storage::set_registry(&env, &migrated);

        events::upgraded(&env, &new_implementation, version);
        Ok(version)
    }

    pub fn rollback(env: Env) -> Result<Address, ProxyError> {
        let implementation = upgradeability::rollback(&env)?;
        events::rolled_back(&env, &implementation);
        Ok(implementation)
    }

    /// Stops all further upgrades, rollbacks and admin changes for good.
    pub fn freeze_upgrades(env: Env) -> Result<(), ProxyError> {
        let admin = Self::admin(env.clone())?;
        upgradeability::freeze(&env)?;
        events::frozen(&env, &admin);
        Ok(())
    }

    pub fn is_frozen(env: Env) -> bool {
        up_storage::is_frozen(&env)
    }

    pub fn implementation(env: Env) -> Result<Address, ProxyError> {
        up_storage::get_implementation(&env).ok_or(ProxyError::NotInitialized)
    }

    pub fn admin(env: Env) -> Result<Address, ProxyError> {
        up_storage::get_admin(&env).ok_or(ProxyError::NotInitialized)
    }

    pub fn change_admin(env: Env, new_admin: Address) -> Result<(), ProxyError> {
        let previous = upgradeability::change_admin(&env, &new_admin)?;
        events::admin_changed(&env, &previous, &new_admin);
        Ok(())
    }

    pub fn version(env: Env) -> u32 {
        up_storage::get_version(&env)
    }

    /// Version reported by the implementation currently in the slot.
    pub fn implementation_version(env: Env) -> Result<u32, ProxyError> {
        lift_infallible(Self::logic(&env)?.try_version())
    }

    pub fn upgrade_history(env: Env) -> Vec<UpgradeHistory> {
        up_storage::get_history(&env)
    }

    // ==================== Payee management ====================

    pub fn add_payee(
        env: Env,
        caller: Address,
        account: Address,
        shares: u64,
    ) -> Result<(), ProxyError> {
        caller.require_auth();
        let registry = Self::registry(&env)?;

        let next = lift(
            Self::logic(&env)?.try_add_payee(&registry, &caller, &account, &shares),
        )?;
        storage::set_registry(&env, &next);

        events::payee_added(&env, &account, shares);
        Ok(())
    }

    pub fn remove_payee(
        env: Env,
        caller: Address,
        account: Address,
        expected_shares: u64,
    ) -> Result<(), ProxyError> {
        caller.require_auth();
        let registry = Self::registry(&env)?;

        let next = lift(
            Self::logic(&env)?.try_remove_payee(&registry, &caller, &account, &expected_shares),
        )?;
        storage::set_registry(&env, &next);

        events::payee_removed(&env, &account, expected_shares);
        Ok(())
    }

    pub fn set_governance(
        env: Env,
        caller: Address,
        new_governance: Address,
    ) -> Result<(), ProxyError> {
        caller.require_auth();
        let registry = Self::registry(&env)?;

        let next = lift(
            Self::logic(&env)?.try_set_governance(&registry, &caller, &new_governance),
        )?;
        storage::set_registry(&env, &next);

        events::governance_changed(&env, &new_governance);
        Ok(())
    }

    // ==================== Queries ====================

    pub fn governance(env: Env) -> Result<Option<Address>, ProxyError> {
        Ok(Self::registry(&env)?.governance)
    }

    pub fn total_shares(env: Env) -> Result<u64, ProxyError> {
        Ok(Self::registry(&env)?.total_shares)
    }

    pub fn payees(env: Env) -> Result<Vec<Address>, ProxyError> {
        Ok(Self::registry(&env)?.payees)
    }

    pub fn payee(env: Env, index: u32) -> Result<Option<Address>, ProxyError> {
        Ok(Self::registry(&env)?.payees.get(index))
    }

    pub fn is_payee(env: Env, account: Address) -> Result<bool, ProxyError> {
        Ok(Self::registry(&env)?.is_payee(&account))
    }

    pub fn shares(env: Env, account: Address) -> Result<u64, ProxyError> {
        Ok(Self::registry(&env)?.shares_of(&account))
    }

    // ==================== Disbursement ====================

    /// Splits the proxy's whole balance of `token` across the payees.
    /// Rounding dust stays in the proxy for the next round.
    pub fn disperse_token(env: Env, caller: Address, token: Address) -> Result<i128, ProxyError> {
        caller.require_auth();
        let registry = Self::registry(&env)?;
        if !registry.is_payee(&caller) {
            log!(&env, "disperse refused for non-payee", caller);
            return Err(SplitterError::NotPayee.into());
        }

        let this = env.current_contract_address();
        let token_client = token::Client::new(&env, &token);
        let balance = token_client.balance(&this);

        let payouts = lift(Self::logic(&env)?.try_split(&registry, &balance))?;

        let mut dispersed: i128 = 0;
        for payout in payouts.iter() {
            if payout.amount <= 0 {
                continue;
            }
            token_client.transfer(&this, &payout.account, &payout.amount);
            storage::add_released(&env, &token, &payout.account, payout.amount);
            events::payment_released(&env, &token, &payout.account, payout.amount);
            dispersed = dispersed.saturating_add(payout.amount);
        }
        storage::add_total_released(&env, &token, dispersed);

        Ok(dispersed)
    }

    pub fn released(env: Env, token: Address, account: Address) -> i128 {
        storage::get_released(&env, &token, &account)
    }

    pub fn total_released(env: Env, token: Address) -> i128 {
        storage::get_total_released(&env, &token)
    }
}

impl SplitterProxy {
    fn registry(env: &Env) -> Result<PayeeRegistry, ProxyError> {
        storage::get_registry(env).ok_or(ProxyError::NotInitialized)
    }

    fn logic(env: &Env) -> Result<ImplementationClient<'_>, ProxyError> {
        let implementation =
            up_storage::get_implementation(env).ok_or(ProxyError::NotInitialized)?;
        Ok(ImplementationClient::new(env, &implementation))
    }
}
