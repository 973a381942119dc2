//! Per-account balances and frozen flags.

use frame_support::dispatch::DispatchResult;

use crate::{AccountData, Accounts, Balance, Config, Error, Pallet};

impl<T: Config> Pallet<T> {
    /// Ledger record for `who`. Unknown accounts read as empty and unfrozen.
    pub fn account(who: &T::AccountId) -> AccountData {
        Accounts::<T>::get(who)
    }

    pub fn balance_of(who: &T::AccountId) -> Balance {
        Self::account(who).balance
    }

    pub fn is_frozen(who: &T::AccountId) -> bool {
        Self::account(who).frozen
    }

    /// Adds `amount` to `who`, creating the record on first touch.
    pub(crate) fn credit(who: &T::AccountId, amount: Balance) -> DispatchResult {
        Accounts::<T>::try_mutate(who, |account| -> DispatchResult {
            account.balance = account.balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    /// Removes `amount` from `who`. Nothing is written on failure.
    pub(crate) fn debit(who: &T::AccountId, amount: Balance) -> DispatchResult {
        Accounts::<T>::try_mutate(who, |account| -> DispatchResult {
            account.balance =
                account.balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
            Ok(())
        })
    }

    /// Sets the frozen flag. Returns `false`, without writing, if it already
    /// had the requested value.
    pub(crate) fn set_frozen(who: &T::AccountId, frozen: bool) -> bool {
        if Self::is_frozen(who) == frozen {
            return false;
        }
        Accounts::<T>::mutate(who, |account| account.frozen = frozen);
        true
    }
}
