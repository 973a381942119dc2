//! Value types held by the ledger.

use codec::{Decode, Encode, MaxEncodedLen};
use core::marker::PhantomData;
use frame_support::{DebugNoBound, EqNoBound, PartialEqNoBound};
use scale_info::TypeInfo;

use crate::{Config, Pallet, LOG_TARGET};

/// Token amount in base units.
pub type Balance = u128;

/// Ledger record of a single account.
///
/// Accounts are never registered explicitly: a key that was never written
/// reads back as `AccountData::default()`, i.e. an empty, unfrozen account.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Encode, Decode, MaxEncodedLen, TypeInfo)]
pub struct AccountData {
    /// Spendable balance.
    pub balance: Balance,
    /// Frozen accounts may not send or receive through `transfer_own`.
    pub frozen: bool,
}

/// Tokens taken out of an account by [`Pallet::withdraw`] and not yet
/// handed to [`Pallet::deposit`].
///
/// Only this pallet can create one, and `deposit` consumes it, so the
/// transfer path can only ever credit what it previously debited. Dropping it
/// undeposited burns the amount from `TotalSupply`, which keeps the supply
/// equal to the sum of balances.
///
/// ```compile_fail
/// use pallet_managed_token::{Config, Withdrawn};
///
/// fn forge<T: Config>() -> Withdrawn<T> {
///     Withdrawn { amount: 5, _marker: Default::default() }
/// }
/// ```
#[must_use = "dropping a withdrawal burns it; pass it to `deposit`"]
#[derive(DebugNoBound, PartialEqNoBound, EqNoBound)]
pub struct Withdrawn<T: Config> {
    amount: Balance,
    _marker: PhantomData<T>,
}

impl<T: Config> Withdrawn<T> {
    pub(crate) fn new(amount: Balance) -> Self {
        Self { amount, _marker: PhantomData }
    }

    pub fn amount(&self) -> Balance {
        self.amount
    }

    /// Marks the amount as credited so that dropping burns nothing.
    pub(crate) fn settle(&mut self) {
        self.amount = 0;
    }
}

impl<T: Config> Drop for Withdrawn<T> {
    fn drop(&mut self) {
        if self.amount > 0 {
            log::debug!(target: LOG_TARGET, "burning {} undeposited", self.amount);
            Pallet::<T>::reduce_supply(self.amount);
        }
    }
}
