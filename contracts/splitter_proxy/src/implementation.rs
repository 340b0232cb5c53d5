use payee_registry::{PayeeRegistry, Payout, SplitterError};
use soroban_sdk::{contractclient, Address, Env, InvokeError, Vec};

use crate::errors::ProxyError;

/// Interface every implementation behind the proxy must expose.
#[contractclient(name = "ImplementationClient")]
pub trait Implementation {
    fn version(env: Env) -> u32;

    fn setup(
        env: Env,
        payees: Vec<Address>,
        shares: Vec<u64>,
    ) -> Result<PayeeRegistry, SplitterError>;

    fn migrate(env: Env, registry: PayeeRegistry, governance: Address) -> PayeeRegistry;

    fn add_payee(
        env: Env,
        registry: PayeeRegistry,
        caller: Address,
        account: Address,
        shares: u64,
    ) -> Result<PayeeRegistry, SplitterError>;

    fn remove_payee(
        env: Env,
        registry: PayeeRegistry,
        caller: Address,
        account: Address,
        expected_shares: u64,
    ) -> Result<PayeeRegistry, SplitterError>;

    fn set_governance(
        env: Env,
        registry: PayeeRegistry,
        caller: Address,
        new_governance: Address,
    ) -> Result<PayeeRegistry, SplitterError>;

    fn split(
        env: Env,
        registry: PayeeRegistry,
        amount: i128,
    ) -> Result<Vec<Payout>, SplitterError>;
}

/// Turns the outcome of a fallible implementation call into the proxy's
/// error space. Splitter errors keep their code.
pub fn lift<T, C>(
    res: Result<Result<T, C>, Result<SplitterError, InvokeError>>,
) -> Result<T, ProxyError> {
    match res {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err.into()),
        Ok(Err(_)) | Err(Err(_)) => Err(ProxyError::ImplementationFailed),
    }
}

/// Same as [`lift`] for calls that cannot fail inside the implementation.
pub fn lift_infallible<T, C, E>(
    res: Result<Result<T, C>, Result<E, InvokeError>>,
) -> Result<T, ProxyError> {
    match res {
        Ok(Ok(value)) => Ok(value),
        _ => Err(ProxyError::ImplementationFailed),
    }
}
