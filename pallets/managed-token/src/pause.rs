//! Global pause switch for the transfer path.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Pallet, Paused};

impl<T: Config> Pallet<T> {
    pub fn is_paused() -> bool {
        Paused::<T>::get()
    }

    /// Consulted by `withdraw` and `deposit` only.
    pub(crate) fn ensure_not_paused() -> DispatchResult {
        ensure!(!Self::is_paused(), Error::<T>::Paused);
        Ok(())
    }

    /// Returns `false` if the flag already had the requested value.
    pub(crate) fn set_paused(paused: bool) -> bool {
        if Self::is_paused() == paused {
            return false;
        }
        Paused::<T>::put(paused);
        true
    }
}
