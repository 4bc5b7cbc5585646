multiversx_sc::imports!();

use crate::errors::ERR_OVERFLOW;
use crate::types::ResourceId;

/// Persisted ledger layout: keyed maps plus the global scalars.
#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("poolToken")]
    fn pool_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("stakeUnit")]
    fn stake_unit(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("rateUnstakedContributors")]
    fn rate_unstaked_contributors(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("yieldAuthorities")]
    fn yield_authorities(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Stake registry ──

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("totalPrincipal")]
    fn total_principal(&self) -> SingleValueMapper<BigUint>;

    // ── Curation ledger ──

    #[storage_mapper("resourceContributor")]
    fn resource_contributor(
        &self,
        resource_id: &ResourceId<Self::Api>,
    ) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("contributorResources")]
    fn contributor_resources(
        &self,
        contributor: &ManagedAddress,
    ) -> VecMapper<ResourceId<Self::Api>>;

    #[storage_mapper("resourceCount")]
    fn resource_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("hasRated")]
    fn has_rated(
        &self,
        voter: &ManagedAddress,
        resource_id: &ResourceId<Self::Api>,
    ) -> SingleValueMapper<bool>;

    #[storage_mapper("resourceVotes")]
    fn resource_votes(&self, resource_id: &ResourceId<Self::Api>) -> SingleValueMapper<u64>;

    #[storage_mapper("contributorVotes")]
    fn contributor_votes(&self, contributor: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("totalVotes")]
    fn total_votes(&self) -> SingleValueMapper<u64>;

    // ── Yield distribution ──

    #[storage_mapper("totalYield")]
    fn total_yield(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("yieldPerVote")]
    fn yield_per_vote(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastClaimedYieldPerVote")]
    fn last_claimed_yield_per_vote(
        &self,
        contributor: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("accruedRewards")]
    fn accrued_rewards(&self, contributor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalPaidOut")]
    fn total_paid_out(&self) -> SingleValueMapper<BigUint>;

    /// Counters fail the transaction instead of wrapping.
    fn checked_increment(&self, value: u64) -> u64 {
        match value.checked_add(1) {
            Some(next) => next,
            None => sc_panic!(ERR_OVERFLOW),
        }
    }
}
