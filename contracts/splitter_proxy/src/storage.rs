use payee_registry::PayeeRegistry;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum DataKey {
    Registry,
    Released(Address, Address),
    TotalReleased(Address),
}

pub fn get_registry(env: &Env) -> Option<PayeeRegistry> {
    env.storage().instance().get(&DataKey::Registry)
}

pub fn set_registry(env: &Env, registry: &PayeeRegistry) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_released(env: &Env, token: &Address, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Released(token.clone(), account.clone()))
        .unwrap_or(0)
}

pub fn add_released(env: &Env, token: &Address, account: &Address, amount: i128) {
    let released = get_released(env, token, account).saturating_add(amount);
    env.storage()
        .persistent()
        .set(&DataKey::Released(token.clone(), account.clone()), &released);
}

pub fn get_total_released(env: &Env, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalReleased(token.clone()))
        .unwrap_or(0)
}

pub fn add_total_released(env: &Env, token: &Address, amount: i128) {
    let total = get_total_released(env, token).saturating_add(amount);
    env.storage()
        .persistent()
        .set(&DataKey::TotalReleased(token.clone()), &total);
}
