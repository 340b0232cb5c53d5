#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, symbol_short, Address, Env, InvokeError, Symbol,
};
use upgradeability::UpgradeError;


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AdminError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// The proxy failed with something other than an upgrade error.
    ProxyCallFailed = 3,

    // Upgrade errors raised by the proxy, same codes.
    InvalidImplementation = 101,
    ProxyAlreadyInitialized = 102,
    ProxyNotInitialized = 103,
    IncompatibleVersion = 104,
    ContractPaused = 105,
    HistoryNotFound = 106,
    SameImplementation = 107,
}

impl From<UpgradeError> for AdminError {
    fn from(err: UpgradeError) -> Self {
        match err {
            UpgradeError::InvalidImplementation => AdminError::InvalidImplementation,
            UpgradeError::AlreadyInitialized => AdminError::ProxyAlreadyInitialized,
            UpgradeError::NotInitialized => AdminError::ProxyNotInitialized,
            UpgradeError::IncompatibleVersion => AdminError::IncompatibleVersion,
            UpgradeError::ContractPaused => AdminError::ContractPaused,
            UpgradeError::HistoryNotFound => AdminError::HistoryNotFound,
            UpgradeError::SameImplementation => AdminError::SameImplementation,
        }
    }
}

const OWNER: Symbol = symbol_short!("OWNER");

/// Admin of one or more splitter proxies. The proxies list this contract
/// as their admin; the owner drives it.
#[contract]
pub struct ProxyAdmin;

#[contractimpl]
impl ProxyAdmin {
    pub fn initialize(env: Env, owner: Address) -> Result<(), AdminError> {
        if env.storage().instance().has(&OWNER) {
            return Err(AdminError::AlreadyInitialized);
        }
        owner.require_auth();
        env.storage().instance().set(&OWNER, &owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, AdminError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(AdminError::NotInitialized)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), AdminError> {
        let owner = Self::require_owner(&env)?;
        env.storage().instance().set(&OWNER, &new_owner);
        env.events()
            .publish((symbol_short!("owner"),), (owner, new_owner));
        Ok(())
    }

    /// Repoints `proxy` at `implementation`. The owner becomes the proxy's
    /// governance if it has none yet.
    pub fn upgrade(env: Env, proxy: Address, implementation: Address) -> Result<u32, AdminError> {
        let owner = Self::require_owner(&env)?;

        let version = forward(
            &env,
            ProxyClient::new(&env, &proxy).try_upgrade(&implementation, &owner),
        )?;

        env.events().publish(
            (symbol_short!("upgraded"), proxy),
            (implementation, version),
        );
        Ok(version)
    }

    /// Sends `proxy` back to the implementation it ran before the last
    /// upgrade.
    pub fn rollback_proxy(env: Env, proxy: Address) -> Result<Address, AdminError> {
        Self::require_owner(&env)?;
        forward(&env, ProxyClient::new(&env, &proxy).try_rollback())
    }

    pub fn freeze_proxy(env: Env, proxy: Address) -> Result<(), AdminError> {
        Self::require_owner(&env)?;
        forward(&env, ProxyClient::new(&env, &proxy).try_freeze_upgrades())
    }

    pub fn get_proxy_implementation(env: Env, proxy: Address) -> Result<Address, AdminError> {
        forward(&env, ProxyClient::new(&env, &proxy).try_implementation())
    }

    pub fn get_proxy_admin(env: Env, proxy: Address) -> Result<Address, AdminError> {
        forward(&env, ProxyClient::new(&env, &proxy).try_admin())
    }

    pub fn change_proxy_admin(
        env: Env,
        proxy: Address,
        new_admin: Address,
    ) -> Result<(), AdminError> {
        Self::require_owner(&env)?;
        forward(&env, ProxyClient::new(&env, &proxy).try_change_admin(&new_admin))
    }
}

impl ProxyAdmin {
    fn require_owner(env: &Env) -> Result<Address, AdminError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(AdminError::NotInitialized)?;
        owner.require_auth();
        Ok(owner)
    }
}

/// Upgrade errors keep their code. Anything else the proxy raises is
/// logged with its code and reported as `ProxyCallFailed`.
fn forward<T, C>(
    env: &Env,
    res: Result<Result<T, C>, Result<UpgradeError, InvokeError>>,
) -> Result<T, AdminError> {
    match res {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err.into()),
        Err(Err(InvokeError::Contract(code))) => {
            log!(env, "proxy call failed", code);
            Err(AdminError::ProxyCallFailed)
        }
        Ok(Err(_)) | Err(Err(InvokeError::Abort)) => Err(AdminError::ProxyCallFailed),
    }
}

// Minimal interface of the proxies this contract administers
#[soroban_sdk::contractclient(name = "ProxyClient")]
pub trait Proxy {
    fn upgrade(
        env: Env,
        new_implementation: Address,
        governance: Address,
    ) -> Result<u32, UpgradeError>;
    fn rollback(env: Env) -> Result<Address, UpgradeError>;
    fn freeze_upgrades(env: Env) -> Result<(), UpgradeError>;
    fn implementation(env: Env) -> Result<Address, UpgradeError>;
    fn admin(env: Env) -> Result<Address, UpgradeError>;
    fn change_admin(env: Env, new_admin: Address) -> Result<(), UpgradeError>;
}
