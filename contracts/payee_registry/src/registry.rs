use soroban_sdk::{Address, Env, Map, Vec};

use crate::{PayeeRegistry, Payout, SplitterError};

impl PayeeRegistry {
    pub fn new(
        env: &Env,
        payees: &Vec<Address>,
        shares: &Vec<u64>,
    ) -> Result<Self, SplitterError> {
        if payees.len() != shares.len() {
            return Err(SplitterError::LengthMismatch);
        }
        if payees.is_empty() {
            return Err(SplitterError::NoPayees);
        }

        let mut registry = PayeeRegistry {
            payees: Vec::new(env),
            shares: Map::new(env),
            total_shares: 0,
            governance: None,
        };
        for (account, share) in payees.iter().zip(shares.iter()) {
            registry.insert(account, share)?;
        }
        Ok(registry)
    }

    pub fn is_payee(&self, account: &Address) -> bool {
        self.shares.contains_key(account.clone())
    }

    pub fn shares_of(&self, account: &Address) -> u64 {
        self.shares.get(account.clone()).unwrap_or(0)
    }

    pub fn ensure_governance(&self, caller: &Address) -> Result<(), SplitterError> {
        match &self.governance {
            Some(governance) if governance == caller => Ok(()),
            _ => Err(SplitterError::NotGovernance),
        }
    }

    pub fn add_payee(
        &mut self,
        caller: &Address,
        account: Address,
        shares: u64,
    ) -> Result<(), SplitterError> {
        self.ensure_governance(caller)?;
        self.insert(account, shares)
    }

    /// Removes `account` and returns the share it held.
    ///
    /// `expected_shares` must equal the recorded share, so a stale view of
    /// the registry cannot remove the wrong entitlement.
    pub fn remove_payee(
        &mut self,
        caller: &Address,
        account: &Address,
        expected_shares: u64,
    ) -> Result<u64, SplitterError> {
        self.ensure_governance(caller)?;

        let recorded = self.shares_of(account);
        if recorded == 0 {
            return Err(SplitterError::AccountHasNoShares);
        }
        if recorded != expected_shares {
            return Err(SplitterError::AccountNotMatching);
        }

        let index = self
            .payees
            .first_index_of(account.clone())
            .ok_or(SplitterError::AccountHasNoShares)?;
        self.payees.remove(index);
        self.shares.remove(account.clone());
        // recorded is part of the total, so this cannot underflow
        self.total_shares -= recorded;
        Ok(recorded)
    }

    pub fn set_governance(
        &mut self,
        caller: &Address,
        new_governance: Address,
    ) -> Result<(), SplitterError> {
        self.ensure_governance(caller)?;
        self.governance = Some(new_governance);
        Ok(())
    }

    /// Installs `governance` when the registry has none yet. Returns whether
    /// anything changed.
    pub fn migrate(&mut self, governance: Address) -> bool {
        if self.governance.is_some() {
            return false;
        }
        self.governance = Some(governance);
        true
    }

    /// Proportional split of `amount`, rounded down per payee. The
    /// remainder is not assigned.
    pub fn split(&self, env: &Env, amount: i128) -> Result<Vec<Payout>, SplitterError> {
        if amount <= 0 {
            return Err(SplitterError::NothingToDisperse);
        }
        if self.total_shares == 0 {
            return Err(SplitterError::NoPayees);
        }

        let total = i128::from(self.total_shares);
        let mut payouts = Vec::new(env);
        for account in self.payees.iter() {
            let share = i128::from(self.shares_of(&account));
            let owed = amount
                .checked_mul(share)
                .ok_or(SplitterError::SharesOverflow)?
                / total;
            payouts.push_back(Payout {
                account,
                amount: owed,
            });
        }
        Ok(payouts)
    }

    fn insert(&mut self, account: Address, shares: u64) -> Result<(), SplitterError> {
        if shares == 0 {
            return Err(SplitterError::ZeroShares);
        }
        if self.is_payee(&account) {
            return Err(SplitterError::AlreadyPayee);
        }
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(SplitterError::SharesOverflow)?;
        self.shares.set(account.clone(), shares);
        self.payees.push_back(account);
        Ok(())
    }
}
