//! Fixture reproducing the live sink: a splitter proxy already serving the
//! existing payees through the legacy splitter, administered by a proxy
//! admin, then upgraded to a fresh Disperse deployment.
use disperse::Disperse;
use proxy_admin::{ProxyAdmin, ProxyAdminClient};
use soroban_sdk::{vec, Address, Env};
use splitter_proxy::{SplitterProxy, SplitterProxyClient, IMPLEMENTATION_SLOT};

use crate::utils::accounts::{self, at};
use crate::utils::constants::{BADGER_SHARES, DFD_SHARES};
use crate::utils::legacy::LegacySplitter;

pub struct SinkFixture<'a> {
    pub env: Env,
    pub deployer: Address,
    pub current_payee_dfd: Address,
    pub current_payee_badger: Address,
    pub new_payee_badger: Address,
    /// Owner of the proxy admin contract; governance once upgraded.
    pub proxy_admin: Address,
    pub proxy: ProxyAdminClient<'a>,
    pub ibbtc_sink: SplitterProxyClient<'a>,
    /// Implementation the sink served before the upgrade.
    pub legacy_implementation: Address,
    /// Disperse deployment installed by the upgrade, `None` before it.
    pub disperse: Option<Address>,
}

impl<'a> SinkFixture<'a> {
    /// Live sink before the upgrade.
    pub fn deployed() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let deployer = at(&env, accounts::DEPLOYER);
        let current_payee_dfd = at(&env, accounts::CURRENT_PAYEE_DFD);
        let current_payee_badger = at(&env, accounts::CURRENT_PAYEE_BADGER);
        let new_payee_badger = at(&env, accounts::NEW_PAYEE_BADGER);
        let proxy_admin = at(&env, accounts::PROXY_ADMIN);

        let admin_id = env.register_contract(None, ProxyAdmin);
        let proxy = ProxyAdminClient::new(&env, &admin_id);
        proxy.initialize(&proxy_admin);

        let legacy_implementation = env.register_contract(None, LegacySplitter);
        let sink_id = env.register_contract(None, SplitterProxy);
        let ibbtc_sink = SplitterProxyClient::new(&env, &sink_id);
        ibbtc_sink.initialize(
            &admin_id,
            &legacy_implementation,
            &vec![&env, current_payee_dfd.clone(), current_payee_badger.clone()],
            &vec![&env, DFD_SHARES, BADGER_SHARES],
        );

        Self {
            env,
            deployer,
            current_payee_dfd,
            current_payee_badger,
            new_payee_badger,
            proxy_admin,
            proxy,
            ibbtc_sink,
            legacy_implementation,
            disperse: None,
        }
    }

    /// Live sink after the upgrade. Panics if the upgrade did not land, so
    /// no test body runs against a half-upgraded sink.
    pub fn upgraded() -> Self {
        let mut fixture = Self::deployed();
        fixture.upgrade_proxy_implementation();
        fixture
    }

    pub fn upgrade_proxy_implementation(&mut self) {
        let disperse = self.env.register_contract(None, Disperse);
        self.proxy.upgrade(&self.ibbtc_sink.address, &disperse);

        assert_eq!(
            self.raw_implementation_slot(),
            disperse,
            "implementation slot does not hold the new deployment"
        );
        assert_eq!(
            self.ibbtc_sink.governance(),
            Some(at(&self.env, accounts::PROXY_ADMIN)),
            "governance not installed by the upgrade"
        );
        self.disperse = Some(disperse);
    }

    /// The Disperse deployment the sink was upgraded to.
    pub fn deployed_disperse(&self) -> &Address {
        self.disperse
            .as_ref()
            .expect("sink has not been upgraded to Disperse")
    }

    /// Reads the implementation slot straight from the sink's storage.
    pub fn raw_implementation_slot(&self) -> Address {
        self.env.as_contract(&self.ibbtc_sink.address, || {
            self.env
                .storage()
                .instance()
                .get(&IMPLEMENTATION_SLOT)
                .expect("implementation slot is empty")
        })
    }

    pub fn account(&self, strkey: &str) -> Address {
        at(&self.env, strkey)
    }
}
