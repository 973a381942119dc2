use crate as pallet_managed_token;
use crate::Balance;
use frame_support::{derive_impl, parameter_types, traits::ConstU32};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        ManagedToken: pallet_managed_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type MaxConsumers = ConstU32<16>;
}

/// Ledger admin; also the "creator" of the reference scenario.
pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const AARON: u64 = 7;

/// 100 billion whole tokens at 8 decimals.
pub const CAP: Balance = 100_000_000_000 * 100_000_000;

parameter_types! {
    pub const MaxSupply: Balance = CAP;
}

impl pallet_managed_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = MaxSupply;
    type WeightInfo = ();
}

pub struct ExtBuilder {
    admin: Option<u64>,
    balances: Vec<(u64, Balance)>,
    paused: bool,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { admin: Some(ADMIN), balances: vec![(ALICE, 1_000_000), (BOB, 500_000)], paused: false }
    }
}

impl ExtBuilder {
    pub fn admin(mut self, admin: Option<u64>) -> Self {
        self.admin = admin;
        self
    }

    pub fn balances(mut self, balances: Vec<(u64, Balance)>) -> Self {
        self.balances = balances;
        self
    }

    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        pallet_managed_token::GenesisConfig::<Test> {
            admin: self.admin,
            token_name: b"Test Token".to_vec(),
            token_symbol: b"TST".to_vec(),
            decimals: 8,
            initial_balances: self.balances,
            paused: self.paused,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut ext = sp_io::TestExternalities::new(t);
        // Events are only recorded from block 1 onwards.
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}
