use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, admin: &Address, implementation: &Address, total_shares: u64) {
    env.events().publish(
        (symbol_short!("init"), admin.clone()),
        (implementation.clone(), total_shares),
    );
}

pub fn upgraded(env: &Env, implementation: &Address, version: u32) {
    env.events()
        .publish((symbol_short!("upgraded"),), (implementation.clone(), version));
}

pub fn rolled_back(env: &Env, implementation: &Address) {
    env.events()
        .publish((symbol_short!("rollback"),), implementation.clone());
}

pub fn frozen(env: &Env, admin: &Address) {
    env.events().publish((symbol_short!("frozen"),), admin.clone());
}

pub fn admin_changed(env: &Env, previous: &Address, admin: &Address) {
    env.events()
        .publish((symbol_short!("admin"),), (previous.clone(), admin.clone()));
}

pub fn payee_added(env: &Env, account: &Address, shares: u64) {
    env.events()
        .publish((symbol_short!("payee_add"), account.clone()), shares);
}

pub fn payee_removed(env: &Env, account: &Address, shares: u64) {
    env.events()
        .publish((symbol_short!("payee_rem"), account.clone()), shares);
}

pub fn governance_changed(env: &Env, governance: &Address) {
    env.events()
        .publish((symbol_short!("gov_set"),), governance.clone());
}

pub fn payment_released(env: &Env, token: &Address, account: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("released"), token.clone(), account.clone()),
        amount,
    );
}
