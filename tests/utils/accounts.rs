//! Fixed accounts the suite acts as. The strkeys carry the same 20-byte
//! identifiers as the accounts on the live deployment.
use soroban_sdk::{Address, Env, String};

pub const DEPLOYER: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAD2KM";
/// 0x5b5cF8620292249669e1DCC73B753d01543D6Ac7
pub const CURRENT_PAYEE_DFD: &str = "CAAAAAAAAAAAAAAAAAAAAW247BRAFERESZU6DXGHHN2T2AKUHVVMPCXH";
/// 0xB65cef03b9B89f99517643226d76e286ee999e77
pub const CURRENT_PAYEE_BADGER: &str = "CAAAAAAAAAAAAAAAAAAABNS454B3TOE7TFIXMQZCNV3OFBXOTGPHOHNQ";
/// 0x042B32Ac6b453485e357938bdC38e0340d4b9276
pub const NEW_PAYEE_BADGER: &str = "CAAAAAAAAAAAAAAAAAAAABBLGKWGWRJUQXRVPE4L3Q4OANANJOJHM7UB";
/// 0xCF7346A5E41b0821b80D5B3fdc385EEB6Dc59F44, owner of the proxy admin and
/// governance after the upgrade
pub const PROXY_ADMIN: &str = "CAAAAAAAAAAAAAAAAAAABT3TI2S6IGYIEG4A2WZ73Q4F523NYWPUINFH";
pub const RANDOM_ACCOUNT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAHK3M";
pub const ZERO_ADDRESS: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Address handle for a fixed strkey
pub fn at(env: &Env, strkey: &str) -> Address {
    Address::from_string(&String::from_str(env, strkey))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_accounts_are_distinct() {
        let env = Env::default();
        let all = [
            DEPLOYER,
            CURRENT_PAYEE_DFD,
            CURRENT_PAYEE_BADGER,
            NEW_PAYEE_BADGER,
            PROXY_ADMIN,
            RANDOM_ACCOUNT,
            ZERO_ADDRESS,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(at(&env, a), at(&env, b));
            }
        }
    }
}
