multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_STAKED, ERR_NOT_STAKED, ERR_WRONG_STAKE_AMOUNT, ERR_WRONG_TOKEN};

/// Fixed-deposit membership: one stake unit per principal buys curation rights.
#[multiversx_sc::module]
pub trait StakeModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: stake
    // Exactly one stake unit of the pool token, once per principal.
    // ========================================================

    #[endpoint(stake)]
    #[payable("*")]
    fn stake(&self) {
        let caller = self.blockchain().get_caller();
        require!(!self.is_staked(&caller), ERR_ALREADY_STAKED);

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.pool_token().get(),
            ERR_WRONG_TOKEN
        );
        let stake_unit = self.stake_unit().get();
        require!(payment.amount == stake_unit, ERR_WRONG_STAKE_AMOUNT);

        self.stakers().insert(caller.clone());
        self.total_principal().update(|total| *total += &stake_unit);

        self.staked_event(&caller, &stake_unit);
    }

    // ========================================================
    // ENDPOINT: refund
    // Returns the stake unit. Votes already earned and unclaimed
    // rewards stay with the principal.
    // ========================================================

    #[endpoint(refund)]
    fn refund(&self) {
        let caller = self.blockchain().get_caller();
        self.require_staked(&caller);

        let stake_unit = self.stake_unit().get();
        self.stakers().swap_remove(&caller);
        self.total_principal().update(|total| *total -= &stake_unit);

        self.send()
            .direct_esdt(&caller, &self.pool_token().get(), 0, &stake_unit);
        self.refunded_event(&caller, &stake_unit);
    }

    fn require_staked(&self, principal: &ManagedAddress) {
        require!(self.is_staked(principal), ERR_NOT_STAKED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isStaked)]
    fn is_staked(&self, principal: &ManagedAddress) -> bool {
        self.stakers().contains(principal)
    }

    #[view(getStakeUnit)]
    fn get_stake_unit(&self) -> BigUint {
        self.stake_unit().get()
    }

    #[view(getTotalPrincipal)]
    fn get_total_principal(&self) -> BigUint {
        self.total_principal().get()
    }

    #[view(getStakerCount)]
    fn get_staker_count(&self) -> u64 {
        self.stakers().len() as u64
    }

    #[view(getStakers)]
    fn get_stakers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let start = usize::try_from(from).unwrap_or(usize::MAX);
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        let end = core::cmp::min(start.saturating_add(count), self.stakers().len());

        for (idx, staker) in self.stakers().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(staker);
            }
        }
        result
    }
}
