//! Total supply bookkeeping against the fixed `MaxSupply` cap.

use frame_support::{ensure, pallet_prelude::*};

use crate::{Balance, Config, Error, Pallet, TotalSupply};

impl<T: Config> Pallet<T> {
    pub fn total_supply() -> Balance {
        TotalSupply::<T>::get()
    }

    pub fn max_supply() -> Balance {
        T::MaxSupply::get()
    }

    /// Supply after minting `amount`, or `SupplyExceeded` if that passes the
    /// cap. Writes nothing; the caller commits the returned value.
    pub(crate) fn supply_after_mint(amount: Balance) -> Result<Balance, DispatchError> {
        let new_total =
            Self::total_supply().checked_add(amount).ok_or(Error::<T>::SupplyExceeded)?;
        ensure!(new_total <= T::MaxSupply::get(), Error::<T>::SupplyExceeded);
        Ok(new_total)
    }

    /// Only called after a successful debit of `amount`, so it cannot
    /// underflow while balances sum to the supply.
    pub(crate) fn reduce_supply(amount: Balance) {
        TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
    }

    /// Checks that balances sum to the total supply and that the supply is
    /// within the cap.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let supply = TotalSupply::<T>::get();
        let sum = crate::Accounts::<T>::iter_values()
            .try_fold(0u128, |sum, account| sum.checked_add(account.balance))
            .ok_or(DispatchError::Other("sum of balances overflows"))?;

        ensure!(sum == supply, DispatchError::Other("total supply differs from sum of balances"));
        ensure!(supply <= T::MaxSupply::get(), DispatchError::Other("total supply above MaxSupply"));
        Ok(())
    }
}
