use payee_registry::SplitterError;
use soroban_sdk::contracterror;
use upgradeability::UpgradeError;

/// Codes 1-10 are the splitter's own, 101-107 come from the upgrade layer.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProxyError {
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

    InvalidImplementation = 101,
    AlreadyInitialized = 102,
    NotInitialized = 103,
    IncompatibleVersion = 104,
    ContractPaused = 105,
    HistoryNotFound = 106,
    SameImplementation = 107,

    ImplementationFailed = 200,
}

impl From<SplitterError> for ProxyError {
    fn from(err: SplitterError) -> Self {
        match err {
            SplitterError::NotGovernance => ProxyError::NotGovernance,
            SplitterError::AccountNotMatching => ProxyError::AccountNotMatching,
            SplitterError::AccountHasNoShares => ProxyError::AccountHasNoShares,
            SplitterError::AlreadyPayee => ProxyError::AlreadyPayee,
            SplitterError::ZeroShares => ProxyError::ZeroShares,
            SplitterError::LengthMismatch => ProxyError::LengthMismatch,
            SplitterError::NoPayees => ProxyError::NoPayees,
            SplitterError::SharesOverflow => ProxyError::SharesOverflow,
            SplitterError::NotPayee => ProxyError::NotPayee,
            SplitterError::NothingToDisperse => ProxyError::NothingToDisperse,
        }
    }
}

impl From<UpgradeError> for ProxyError {
    fn from(err: UpgradeError) -> Self {
        match err {
            UpgradeError::InvalidImplementation => ProxyError::InvalidImplementation,
            UpgradeError::AlreadyInitialized => ProxyError::AlreadyInitialized,
            UpgradeError::NotInitialized => ProxyError::NotInitialized,
            UpgradeError::IncompatibleVersion => ProxyError::IncompatibleVersion,
            UpgradeError::ContractPaused => ProxyError::ContractPaused,
            UpgradeError::HistoryNotFound => ProxyError::HistoryNotFound,
            UpgradeError::SameImplementation => ProxyError::SameImplementation,
        }
    }
}

impl ProxyError {
    /// The splitter error behind this code, if it is one.
    pub fn as_splitter_error(&self) -> Option<SplitterError> {
        let err = match self {
            ProxyError::NotGovernance => SplitterError::NotGovernance,
            ProxyError::AccountNotMatching => SplitterError::AccountNotMatching,
            ProxyError::AccountHasNoShares => SplitterError::AccountHasNoShares,
            ProxyError::AlreadyPayee => SplitterError::AlreadyPayee,
            ProxyError::ZeroShares => SplitterError::ZeroShares,
            ProxyError::LengthMismatch => SplitterError::LengthMismatch,
            ProxyError::NoPayees => SplitterError::NoPayees,
            ProxyError::SharesOverflow => SplitterError::SharesOverflow,
            ProxyError::NotPayee => SplitterError::NotPayee,
            ProxyError::NothingToDisperse => SplitterError::NothingToDisperse,
            _ => return None,
        };
        Some(err)
    }
}
