//! Benchmarking setup for pallet-managed-token

use super::*;

#[allow(unused)]
use crate::Pallet as ManagedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const AMOUNT: Balance = 1_000_000;

/// Makes the whitelisted caller the admin, replacing any genesis admin.
fn install_admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = whitelisted_caller();
    Admin::<T>::put(&admin);
    admin
}

/// Gives `who` a balance without going through `mint`, keeping supply in step.
fn fund<T: Config>(who: &T::AccountId, amount: Balance) {
    Accounts::<T>::mutate(who, |account| account.balance += amount);
    TotalSupply::<T>::mutate(|supply| *supply += amount);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Admin::<T>::kill();
        let caller: T::AccountId = whitelisted_caller();
        let admin: T::AccountId = account("admin", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), admin.clone());

        assert_eq!(Admin::<T>::get(), Some(admin));
    }

    #[benchmark]
    fn mint() {
        let admin = install_admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), recipient.clone(), AMOUNT);

        assert_eq!(Accounts::<T>::get(&recipient).balance, AMOUNT);
    }

    #[benchmark]
    fn burn() {
        let admin = install_admin::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        fund::<T>(&holder, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), holder.clone(), AMOUNT);

        assert_eq!(Accounts::<T>::get(&holder).balance, 0);
    }

    #[benchmark]
    fn transfer() {
        let admin = install_admin::<T>();
        let from: T::AccountId = account("from", 0, 0);
        let to: T::AccountId = account("to", 0, 0);
        fund::<T>(&from, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), from.clone(), to.clone(), AMOUNT);

        assert_eq!(Accounts::<T>::get(&to).balance, AMOUNT);
    }

    #[benchmark]
    fn transfer_own() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), AMOUNT);

        assert_eq!(Accounts::<T>::get(&recipient).balance, AMOUNT);
    }

    #[benchmark]
    fn freeze_account() {
        let admin = install_admin::<T>();
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), target.clone());

        assert!(Accounts::<T>::get(&target).frozen);
    }

    #[benchmark]
    fn unfreeze_account() {
        let admin = install_admin::<T>();
        let target: T::AccountId = account("target", 0, 0);
        Accounts::<T>::mutate(&target, |account| account.frozen = true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), target.clone());

        assert!(!Accounts::<T>::get(&target).frozen);
    }

    #[benchmark]
    fn set_pause() {
        let admin = install_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), true);

        assert!(Paused::<T>::get());
    }

    impl_benchmark_test_suite!(ManagedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
