use soroban_sdk::{contracterror, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SplitterError {
    NotGovernance = 1,
    AccountNotMatching = 2,
    AccountHasNoShares = 3,
    AlreadyPayee = 4,
    ZeroShares = 5,
    LengthMismatch = 6,
    NoPayees = 7,
    SharesOverflow = 8,
    NotPayee = 9,
    NothingToDisperse = 10,
}

impl SplitterError {
    /// Revert reason reported to callers. These literals are part of the
    /// public interface and must not change.
    pub const fn reason(&self) -> &'static str {
        match self {
            SplitterError::NotGovernance => "PaymentSplitter: not governance",
            SplitterError::AccountNotMatching => "PaymentSplitter: account to remove not matching",
            SplitterError::AccountHasNoShares => "PaymentSplitter: account has not shares",
            SplitterError::AlreadyPayee => "PaymentSplitter: account already has shares",
            SplitterError::ZeroShares => "PaymentSplitter: shares are 0",
            SplitterError::LengthMismatch => "PaymentSplitter: payees and shares length mismatch",
            SplitterError::NoPayees => "PaymentSplitter: no payees",
            SplitterError::SharesOverflow => "PaymentSplitter: shares overflow",
            SplitterError::NotPayee => "PaymentSplitter: account is not a payee",
            SplitterError::NothingToDisperse => "PaymentSplitter: nothing to disperse",
        }
    }

    pub fn message(&self, env: &Env) -> String {
        String::from_str(env, self.reason())
    }
}
