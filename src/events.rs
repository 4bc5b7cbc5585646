multiversx_sc::imports!();

use crate::types::ResourceId;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("staked")]
    fn staked_event(&self, #[indexed] principal: &ManagedAddress, amount: &BigUint);

    #[event("refunded")]
    fn refunded_event(&self, #[indexed] principal: &ManagedAddress, amount: &BigUint);

    #[event("resourceAdded")]
    fn resource_added_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] resource_id: &ResourceId<Self::Api>,
    );

    #[event("rated")]
    fn rated_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] resource_id: &ResourceId<Self::Api>,
        #[indexed] contributor: &ManagedAddress,
    );

    #[event("yieldAccrued")]
    fn yield_accrued_event(
        &self,
        #[indexed] authority: &ManagedAddress,
        #[indexed] amount: &BigUint,
        yield_per_vote: &BigUint,
    );

    #[event("payout")]
    fn payout_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    #[event("yieldAuthorityAdded")]
    fn yield_authority_added_event(&self, #[indexed] authority: &ManagedAddress);

    #[event("yieldAuthorityRemoved")]
    fn yield_authority_removed_event(&self, #[indexed] authority: &ManagedAddress);

    #[event("ratingPolicyChanged")]
    fn rating_policy_changed_event(&self, #[indexed] rate_unstaked_contributors: bool);
}
