//! # Managed Token Pallet
//!
//! A fungible token ledger under a single administrative account. The admin
//! mints up to a fixed `MaxSupply`, burns from any account, freezes accounts
//! and pauses the transfer path. Holders move their own tokens with
//! `transfer_own` unless frozen or paused.
//!
//! Every balance-changing call keeps `TotalSupply` equal to the sum of all
//! balances and never above `MaxSupply`. A failing call leaves storage
//! untouched.
//!
//! ## Calls
//!
//! | Call | Origin | Notes |
//! |---|---|---|
//! | `initialize` | signed or root, once | binds the admin account |
//! | `mint` | admin | capped by `MaxSupply` |
//! | `burn` | admin | ignores freeze and pause |
//! | `transfer` | admin | pause-gated, ignores freeze |
//! | `transfer_own` | any signed | pause-gated, blocked by freeze on either side |
//! | `freeze_account` / `unfreeze_account` | admin | idempotent |
//! | `set_pause` | admin | idempotent |
//!
//! Other pallets reach the transfer path through [`Pallet::withdraw`] and
//! [`Pallet::deposit`], which are pause-gated but do not look at freeze flags.

#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is deprecated upstream; kept until the runtime
// moves to the `frame_system::Config` bound.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, ensure_signed_or_root, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::{AccountData, Balance, Withdrawn};
pub use weights::WeightInfo;

mod access;
mod balances;
mod pause;
mod supply;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::managed-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Hard cap on total supply, in base units. Never changes for a
        /// deployed ledger.
        #[pallet::constant]
        type MaxSupply: Get<Balance>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sovereign Bond Token")
    #[pallet::storage]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "SBT")
    #[pallet::storage]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (8 for the reference deployment)
    #[pallet::storage]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// The single account allowed to mint, burn, freeze and pause.
    #[pallet::storage]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Minted minus burned. Always equal to the sum of `Accounts` balances.
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// When set, `withdraw` and `deposit` (and so both transfer calls) fail.
    #[pallet::storage]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Balance and frozen flag per account
    #[pallet::storage]
    pub type Accounts<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, AccountData, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ledger bound to its admin account
        Initialized { admin: T::AccountId },
        /// New tokens minted
        Minted { to: T::AccountId, amount: Balance },
        /// Tokens destroyed by the admin
        Burned { from: T::AccountId, amount: Balance },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Account frozen (cannot use `transfer_own`)
        Frozen { account: T::AccountId },
        /// Account unfrozen
        Unfrozen { account: T::AccountId },
        /// Transfer path paused or resumed
        PauseSet { paused: bool },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// `initialize` was already called, or the admin was set at genesis.
        AlreadyInitialized,
        /// No admin has been bound yet.
        NotInitialized,
        /// Caller is not the admin.
        PermissionDenied,
        /// Mint would push total supply above `MaxSupply`.
        SupplyExceeded,
        /// Debit larger than the account balance.
        InsufficientBalance,
        /// The transfer path is paused.
        Paused,
        /// Sender or receiver of a `transfer_own` is frozen.
        AccountFrozen,
        /// Arithmetic overflow.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxSupply::get() > 0, "MaxSupply must be non-zero");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Binds the admin account. Callable once; genesis counts as the
        /// first call when it names an admin.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(origin: OriginFor<T>, admin: T::AccountId) -> DispatchResult {
            let _caller: Option<T::AccountId> = ensure_signed_or_root(origin)?;
            Self::do_initialize(admin)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_mint(&to, amount)?;
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Burns from any account, frozen or not, paused or not.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, from: T::AccountId, amount: Balance) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_burn(&from, amount)?;
            Self::deposit_event(Event::Burned { from, amount });
            Ok(())
        }

        /// Admin-directed move between two accounts. Pause-gated; freeze flags
        /// are not consulted on this path.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_transfer(&from, &to, amount)?;
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Moves the caller's own tokens. Fails if either side is frozen.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_own())]
        pub fn transfer_own(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let from = ensure_signed(origin)?;
            ensure!(!Self::is_frozen(&from), Error::<T>::AccountFrozen);
            ensure!(!Self::is_frozen(&to), Error::<T>::AccountFrozen);

            Self::do_transfer(&from, &to, amount)?;
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::freeze_account())]
        pub fn freeze_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;
            if Self::set_frozen(&account, true) {
                Self::deposit_event(Event::Frozen { account });
            }
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unfreeze_account())]
        pub fn unfreeze_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;
            if Self::set_frozen(&account, false) {
                Self::deposit_event(Event::Unfrozen { account });
            }
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::set_pause())]
        pub fn set_pause(origin: OriginFor<T>, paused: bool) -> DispatchResult {
            Self::ensure_admin(origin)?;
            if Self::set_paused(paused) {
                log::info!(target: LOG_TARGET, "transfer path paused: {paused}");
                Self::deposit_event(Event::PauseSet { paused });
            }
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Admin account; equivalent to calling `initialize` at genesis
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial token mints (account, amount), subject to `MaxSupply`
        pub initial_balances: Vec<(T::AccountId, Balance)>,
        /// Start with the transfer path paused
        pub paused: bool,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref admin) = self.admin {
                Pallet::<T>::do_initialize(admin.clone()).expect("fresh ledger has no admin");
            }

            for (account, amount) in &self.initial_balances {
                Pallet::<T>::do_mint(account, *amount)
                    .expect("Initial balances exceed MaxSupply");
            }

            Paused::<T>::put(self.paused);
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn token_name() -> Vec<u8> {
        TokenName::<T>::get().into_inner()
    }

    pub fn token_symbol() -> Vec<u8> {
        TokenSymbol::<T>::get().into_inner()
    }

    pub fn decimals() -> u8 {
        Decimals::<T>::get()
    }

    /// Takes `amount` out of `who` for the transfer path. The returned value
    /// must be passed to `deposit`; dropping it burns the amount instead.
    pub fn withdraw(who: &T::AccountId, amount: Balance) -> Result<Withdrawn<T>, DispatchError> {
        Self::ensure_not_paused()?;
        Self::debit(who, amount)?;
        Ok(Withdrawn::new(amount))
    }

    /// Credits a withdrawal to `who`. On error the withdrawal is dropped and
    /// so burned, unless the caller's storage layer rolls it back.
    pub fn deposit(who: &T::AccountId, mut value: Withdrawn<T>) -> DispatchResult {
        Self::ensure_not_paused()?;
        Self::credit(who, value.amount())?;
        value.settle();
        Ok(())
    }

    pub(crate) fn do_initialize(admin: T::AccountId) -> DispatchResult {
        ensure!(!Admin::<T>::exists(), Error::<T>::AlreadyInitialized);
        Admin::<T>::put(&admin);

        log::info!(target: LOG_TARGET, "ledger initialized with admin {:?}", admin);
        Self::deposit_event(Event::Initialized { admin });
        Ok(())
    }

    /// The cap is checked before anything is written.
    pub(crate) fn do_mint(to: &T::AccountId, amount: Balance) -> DispatchResult {
        let new_total = Self::supply_after_mint(amount)?;
        Self::credit(to, amount)?;
        TotalSupply::<T>::put(new_total);

        log::debug!(target: LOG_TARGET, "minted {amount} to {to:?}, supply {new_total}");
        Ok(())
    }

    pub(crate) fn do_burn(from: &T::AccountId, amount: Balance) -> DispatchResult {
        Self::debit(from, amount)?;
        Self::reduce_supply(amount);

        log::debug!(target: LOG_TARGET, "burned {amount} from {from:?}");
        Ok(())
    }

    /// Both legs commit together or not at all.
    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> DispatchResult {
        frame_support::storage::with_storage_layer(|| -> DispatchResult {
            let value = Self::withdraw(from, amount)?;
            Self::deposit(to, value)
        })?;

        log::debug!(target: LOG_TARGET, "moved {amount} from {from:?} to {to:?}");
        Ok(())
    }
}
