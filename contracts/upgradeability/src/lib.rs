#![no_std]

//! Implementation-slot bookkeeping shared by upgradeable proxies.
//!
//! A proxy keeps the address of the contract that carries its logic in a
//! fixed instance-storage slot ([`storage::IMPLEMENTATION_SLOT`]). Repointing
//! that slot is the upgrade; the proxy's own storage is left untouched.

use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Env, Symbol, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum UpgradeError {
    InvalidImplementation = 101,
    AlreadyInitialized = 102,
    NotInitialized = 103,
    IncompatibleVersion = 104,
    ContractPaused = 105,
    HistoryNotFound = 106,
    SameImplementation = 107,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UpgradeHistory {
    pub implementation: Address,
    pub version: u32,
    pub upgraded_at: u64,
    pub description: Symbol,
}

pub mod storage {
    use super::*;

    /// Raw slot holding the current implementation address.
    pub const IMPLEMENTATION_SLOT: Symbol = symbol_short!("IMPL_SLOT");
    pub const VERSION: Symbol = symbol_short!("VERSION");
    pub const ADMIN: Symbol = symbol_short!("UP_ADMIN");
    pub const HISTORY: Symbol = symbol_short!("HISTORY");
    pub const IS_FROZEN: Symbol = symbol_short!("FROZEN");
    pub const LINEAGE: Symbol = symbol_short!("LINEAGE");

    pub fn get_implementation(env: &Env) -> Option<Address> {
        env.storage().instance().get(&IMPLEMENTATION_SLOT)
    }

    pub fn set_implementation(env: &Env, implementation: &Address) {
        env.storage()
            .instance()
            .set(&IMPLEMENTATION_SLOT, implementation);
    }

    pub fn get_version(env: &Env) -> u32 {
        env.storage().instance().get(&VERSION).unwrap_or(0)
    }

    pub fn set_version(env: &Env, version: u32) {
        env.storage().instance().set(&VERSION, &version);
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&ADMIN)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&ADMIN, admin);
    }

    pub fn is_frozen(env: &Env) -> bool {
        env.storage().instance().get(&IS_FROZEN).unwrap_or(false)
    }

    pub fn freeze(env: &Env) {
        env.storage().instance().set(&IS_FROZEN, &true);
    }

    /// Implementations still reachable by rollback, oldest first. The last
    /// entry is the current implementation.
    pub fn get_lineage(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&LINEAGE)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_lineage(env: &Env, lineage: &Vec<Address>) {
        env.storage().instance().set(&LINEAGE, lineage);
    }

    pub fn add_history(env: &Env, history: UpgradeHistory) {
        let mut list: Vec<UpgradeHistory> = env
            .storage()
            .persistent()
            .get(&HISTORY)
            .unwrap_or(Vec::new(env));
        list.push_back(history);
        env.storage().persistent().set(&HISTORY, &list);
    }

    pub fn get_history(env: &Env) -> Vec<UpgradeHistory> {
        env.storage()
            .persistent()
            .get(&HISTORY)
            .unwrap_or(Vec::new(env))
    }
}

/// Writes the first implementation and admin of a fresh proxy.
pub fn init(env: &Env, admin: &Address, implementation: &Address) -> Result<(), UpgradeError> {
    if storage::get_implementation(env).is_some() {
        return Err(UpgradeError::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
    storage::set_implementation(env, implementation);
    storage::set_lineage(env, &soroban_sdk::vec![env, implementation.clone()]);
    storage::set_version(env, 1);
    storage::add_history(
        env,
        UpgradeHistory {
            implementation: implementation.clone(),
            version: 1,
            upgraded_at: env.ledger().timestamp(),
            description: symbol_short!("init"),
        },
    );
    Ok(())
}

pub fn authorize_upgrade(env: &Env) -> Result<Address, UpgradeError> {
    if storage::is_frozen(env) {
        return Err(UpgradeError::ContractPaused);
    }
    let admin = storage::get_admin(env).ok_or(UpgradeError::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

/// Repoints the implementation slot. Returns the new version number.
pub fn execute_upgrade(
    env: &Env,
    new_implementation: &Address,
    description: Symbol,
) -> Result<u32, UpgradeError> {
    authorize_upgrade(env)?;

    let current = storage::get_implementation(env).ok_or(UpgradeError::NotInitialized)?;
    if current == *new_implementation {
        return Err(UpgradeError::SameImplementation);
    }
    if *new_implementation == env.current_contract_address() {
        return Err(UpgradeError::InvalidImplementation);
    }

    let new_version = storage::get_version(env)
        .checked_add(1)
        .ok_or(UpgradeError::IncompatibleVersion)?;

    storage::add_history(
        env,
        UpgradeHistory {
            implementation: new_implementation.clone(),
            version: new_version,
            upgraded_at: env.ledger().timestamp(),
            description,
        },
    );
    let mut lineage = storage::get_lineage(env);
    lineage.push_back(new_implementation.clone());
    storage::set_lineage(env, &lineage);
    storage::set_version(env, new_version);
    storage::set_implementation(env, new_implementation);

    Ok(new_version)
}

/// Points the slot back at the implementation that preceded the current
/// one. Repeated rollbacks keep walking back until only the first
/// implementation is left.
pub fn rollback(env: &Env) -> Result<Address, UpgradeError> {
    authorize_upgrade(env)?;

    let mut lineage = storage::get_lineage(env);
    if lineage.len() < 2 {
        return Err(UpgradeError::HistoryNotFound);
    }
    lineage.pop_back();
    let target = lineage.last().ok_or(UpgradeError::HistoryNotFound)?;

    let next_version = storage::get_version(env)
        .checked_add(1)
        .ok_or(UpgradeError::IncompatibleVersion)?;
    storage::add_history(
        env,
        UpgradeHistory {
            implementation: target.clone(),
            version: next_version,
            upgraded_at: env.ledger().timestamp(),
            description: symbol_short!("rollback"),
        },
    );
    storage::set_lineage(env, &lineage);
    storage::set_version(env, next_version);
    storage::set_implementation(env, &target);

    Ok(target)
}

/// Permanently disables upgrade, rollback and admin changes.
pub fn freeze(env: &Env) -> Result<(), UpgradeError> {
    authorize_upgrade(env)?;
    storage::freeze(env);
    Ok(())
}

/// Hands the upgrade right to another address.
pub fn change_admin(env: &Env, new_admin: &Address) -> Result<Address, UpgradeError> {
    let previous = authorize_upgrade(env)?;
    storage::set_admin(env, new_admin);
    Ok(previous)
}
