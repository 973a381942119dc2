//! Admin capability checks.

use frame_support::{ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};

use crate::{Admin, Config, Error, Pallet};

impl<T: Config> Pallet<T> {
    /// The account bound by `initialize`, if any.
    pub fn admin() -> Option<T::AccountId> {
        Admin::<T>::get()
    }

    /// Resolves `origin` to the admin account.
    ///
    /// Any origin other than the admin's signature, root included, fails
    /// with `PermissionDenied`.
    pub(crate) fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let caller = ensure_signed(origin).map_err(|_| Error::<T>::PermissionDenied)?;
        let admin = Admin::<T>::get().ok_or(Error::<T>::NotInitialized)?;
        ensure!(caller == admin, Error::<T>::PermissionDenied);
        Ok(caller)
    }
}
