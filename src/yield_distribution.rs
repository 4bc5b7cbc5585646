multiversx_sc::imports!();

use crate::accumulator;
use crate::errors::{
    ERR_NO_NEW_REWARDS, ERR_NO_VOTES_RECEIVED, ERR_NO_VOTES_YET, ERR_WRONG_TOKEN, ERR_ZERO_YIELD,
};

/// Pull-based proportional yield. Injections only move the global
/// accumulator; contributors realize their share when they call `payout`.
#[multiversx_sc::module]
pub trait YieldModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::authority::AuthorityModule
{
    // ========================================================
    // ENDPOINT: injectYield
    // yield_per_vote += amount * SCALE / total_votes
    // ========================================================

    #[endpoint(injectYield)]
    #[payable("*")]
    fn inject_yield(&self) {
        let caller = self.blockchain().get_caller();
        self.require_yield_authority(&caller);

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.pool_token().get(),
            ERR_WRONG_TOKEN
        );
        let amount = payment.amount.clone();
        require!(amount > 0u64, ERR_ZERO_YIELD);

        // Nobody to share with: reject rather than strand the yield.
        let increment =
            match accumulator::scale_amount_by_votes(&amount, self.total_votes().get()) {
                Some(increment) => increment,
                None => sc_panic!(ERR_NO_VOTES_YET),
            };

        self.total_yield().update(|total| *total += &amount);
        let yield_per_vote = self.yield_per_vote().update(|acc| {
            *acc += &increment;
            acc.clone()
        });

        self.yield_accrued_event(&caller, &amount, &yield_per_vote);
    }

    // ========================================================
    // ENDPOINT: payout
    // Pays everything accrued since the caller's last settlement.
    // Staking is not required; past rewards survive a refund.
    // ========================================================

    #[endpoint(payout)]
    fn payout(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.contributor_votes(&caller).get() > 0,
            ERR_NO_VOTES_RECEIVED
        );

        self.settle_contributor(&caller);
        let owed = self.accrued_rewards(&caller).take();
        require!(owed > 0u64, ERR_NO_NEW_REWARDS);

        self.total_paid_out().update(|total| *total += &owed);

        self.send()
            .direct_esdt(&caller, &self.pool_token().get(), 0, &owed);
        self.payout_event(&caller, &owed);
    }

    // ========================================================
    // INTERNAL: settlement
    // Moves rewards earned by the contributor's current votes into
    // accrued_rewards and checkpoints the accumulator. Must run before
    // contributor_votes changes, so a new vote only earns from
    // injections that happen after it was cast.
    // ========================================================

    fn settle_contributor(&self, contributor: &ManagedAddress) {
        let yield_per_vote = self.yield_per_vote().get();
        let checkpoint = self.last_claimed_yield_per_vote(contributor);

        let pending = accumulator::pending_rewards(
            &yield_per_vote,
            &checkpoint.get(),
            self.contributor_votes(contributor).get(),
        );
        if pending > 0u64 {
            self.accrued_rewards(contributor)
                .update(|accrued| *accrued += &pending);
        }

        checkpoint.set(&yield_per_vote);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getClaimableRewards)]
    fn get_claimable_rewards(&self, contributor: &ManagedAddress) -> BigUint {
        let pending = accumulator::pending_rewards(
            &self.yield_per_vote().get(),
            &self.last_claimed_yield_per_vote(contributor).get(),
            self.contributor_votes(contributor).get(),
        );
        self.accrued_rewards(contributor).get() + pending
    }

    #[view(getAccruedRewards)]
    fn get_accrued_rewards(&self, contributor: &ManagedAddress) -> BigUint {
        self.accrued_rewards(contributor).get()
    }

    #[view(getLastClaimedYieldPerVote)]
    fn get_last_claimed_yield_per_vote(&self, contributor: &ManagedAddress) -> BigUint {
        self.last_claimed_yield_per_vote(contributor).get()
    }

    #[view(getYieldPerVote)]
    fn get_yield_per_vote(&self) -> BigUint {
        self.yield_per_vote().get()
    }

    #[view(getTotalYield)]
    fn get_total_yield(&self) -> BigUint {
        self.total_yield().get()
    }

    #[view(getTotalPaidOut)]
    fn get_total_paid_out(&self) -> BigUint {
        self.total_paid_out().get()
    }
}
