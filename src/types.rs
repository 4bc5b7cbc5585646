multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Length in bytes of a resource identifier (a 32-byte content hash).
pub const RESOURCE_ID_LEN: usize = 32;

pub type ResourceId<M> = ManagedByteArray<M, RESOURCE_ID_LEN>;

// ============================================================
// Resource — a registered, shareable content identifier
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Resource<M: ManagedTypeApi> {
    pub id: ResourceId<M>,
    pub contributor: ManagedAddress<M>,
    /// Votes this resource has received.
    pub votes: u64,
}

// ============================================================
// Contributor Stats — per-principal snapshot for read mirrors
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ContributorStats<M: ManagedTypeApi> {
    pub staked: bool,
    /// Votes received across all of the contributor's resources.
    pub votes: u64,
    pub resource_count: u64,
    /// Accumulator value at the last settlement (scaled).
    pub checkpoint: BigUint<M>,
    /// Settled but not yet paid out.
    pub accrued: BigUint<M>,
    /// What `payout` would transfer right now.
    pub claimable: BigUint<M>,
}
