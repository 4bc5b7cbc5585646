#![no_std]

multiversx_sc::imports!();

pub mod accumulator;
pub mod authority;
pub mod curation;
pub mod errors;
pub mod events;
pub mod stake;
pub mod storage;
pub mod types;
pub mod yield_distribution;

use errors::{ERR_INVALID_TOKEN, ERR_ZERO_STAKE_UNIT};
use types::ContributorStats;

// ============================================================
// Contract
// ============================================================

/// Stake-gated curation pool. Staked principals register resources and
/// rate each other's; injected yield is shared among contributors in
/// proportion to the votes their resources hold.
#[multiversx_sc::contract]
pub trait CurationPool:
    storage::StorageModule
    + events::EventsModule
    + authority::AuthorityModule
    + stake::StakeModule
    + yield_distribution::YieldModule
    + curation::CurationModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the first yield authority.
    #[init]
    fn init(&self, pool_token: TokenIdentifier, stake_unit: BigUint) {
        require!(pool_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(stake_unit > 0u64, ERR_ZERO_STAKE_UNIT);

        self.pool_token().set(&pool_token);
        self.stake_unit().set(&stake_unit);
        self.rate_unstaked_contributors().set(true);

        self.total_principal().set(BigUint::zero());
        self.total_yield().set(BigUint::zero());
        self.yield_per_vote().set(BigUint::zero());
        self.total_votes().set(0u64);

        let deployer = self.blockchain().get_caller();
        self.yield_authorities().insert(deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setRateUnstakedContributors
    // Whether resources of a contributor who refunded may still
    // collect votes. Earned votes and rewards are kept either way.
    // ========================================================

    #[only_owner]
    #[endpoint(setRateUnstakedContributors)]
    fn set_rate_unstaked_contributors(&self, allowed: bool) {
        self.rate_unstaked_contributors().set(allowed);
        self.rating_policy_changed_event(allowed);
    }

    // ========================================================
    // VIEWS — aggregate queries for read mirrors
    // ========================================================

    #[view(getPoolToken)]
    fn get_pool_token(&self) -> TokenIdentifier {
        self.pool_token().get()
    }

    #[view(getRateUnstakedContributors)]
    fn get_rate_unstaked_contributors(&self) -> bool {
        self.rate_unstaked_contributors().get()
    }

    /// (pool token, stake unit, rate-unstaked flag, accumulator scale)
    #[view(getPoolConfig)]
    fn get_pool_config(&self) -> MultiValue4<TokenIdentifier, BigUint, bool, BigUint> {
        (
            self.pool_token().get(),
            self.stake_unit().get(),
            self.rate_unstaked_contributors().get(),
            accumulator::scale::<Self::Api>(),
        )
            .into()
    }

    /// (total principal, total yield, yield per vote, total votes, stakers, resources)
    #[view(getPoolStats)]
    fn get_pool_stats(&self) -> MultiValue6<BigUint, BigUint, BigUint, u64, u64, u64> {
        (
            self.total_principal().get(),
            self.total_yield().get(),
            self.yield_per_vote().get(),
            self.total_votes().get(),
            self.stakers().len() as u64,
            self.resource_count().get(),
        )
            .into()
    }

    #[view(getContributorStats)]
    fn get_contributor_stats(&self, contributor: &ManagedAddress) -> ContributorStats<Self::Api> {
        ContributorStats {
            staked: self.is_staked(contributor),
            votes: self.contributor_votes(contributor).get(),
            resource_count: self.contributor_resources(contributor).len() as u64,
            checkpoint: self.last_claimed_yield_per_vote(contributor).get(),
            accrued: self.accrued_rewards(contributor).get(),
            claimable: self.get_claimable_rewards(contributor),
        }
    }
}
