//! Weights for pallet-managed-token.
//!
//! Hand-estimated until the benchmarks in `benchmarking.rs` are run against
//! reference hardware; regenerate this file from their output.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-managed-token.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn transfer_own() -> Weight;
    fn freeze_account() -> Weight;
    fn unfreeze_account() -> Weight;
    fn set_pause() -> Weight;
}

/// Weights for pallet-managed-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `ManagedToken::Admin` (r:1 w:1)
    fn initialize() -> Weight {
        Weight::from_parts(9_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `ManagedToken::Admin` (r:1 w:0)
    /// Storage: `ManagedToken::TotalSupply` (r:1 w:1)
    /// Storage: `ManagedToken::Accounts` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `ManagedToken::Admin` (r:1 w:0)
    /// Storage: `ManagedToken::TotalSupply` (r:1 w:1)
    /// Storage: `ManagedToken::Accounts` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `ManagedToken::Admin` (r:1 w:0)
    /// Storage: `ManagedToken::Paused` (r:2 w:0)
    /// Storage: `ManagedToken::Accounts` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(24_000_000, 6_082)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `ManagedToken::Paused` (r:2 w:0)
    /// Storage: `ManagedToken::Accounts` (r:4 w:2)
    fn transfer_own() -> Weight {
        Weight::from_parts(23_000_000, 6_082)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `ManagedToken::Admin` (r:1 w:0)
    /// Storage: `ManagedToken::Accounts` (r:1 w:1)
    fn freeze_account() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `ManagedToken::Admin` (r:1 w:0)
    /// Storage: `ManagedToken::Accounts` (r:1 w:1)
    fn unfreeze_account() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `ManagedToken::Admin` (r:1 w:0)
    /// Storage: `ManagedToken::Paused` (r:1 w:1)
    fn set_pause() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(9_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(24_000_000, 6_082)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_own() -> Weight {
        Weight::from_parts(23_000_000, 6_082)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn freeze_account() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unfreeze_account() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_pause() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
