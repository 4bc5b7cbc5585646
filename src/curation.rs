multiversx_sc::imports!();

use crate::errors::{
    ERR_CONTRIBUTOR_NOT_STAKED, ERR_DUPLICATE_VOTE, ERR_RESOURCE_EXISTS, ERR_SELF_RATING,
    ERR_UNKNOWN_RESOURCE,
};
use crate::types::{Resource, ResourceId};

/// Resource registration and one-vote-per-resource rating.
#[multiversx_sc::module]
pub trait CurationModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::authority::AuthorityModule
    + crate::stake::StakeModule
    + crate::yield_distribution::YieldModule
{
    // ========================================================
    // ENDPOINT: addResource
    // ========================================================

    #[endpoint(addResource)]
    fn add_resource(&self, resource_id: ResourceId<Self::Api>) {
        let caller = self.blockchain().get_caller();
        self.require_staked(&caller);

        let contributor = self.resource_contributor(&resource_id);
        require!(contributor.is_empty(), ERR_RESOURCE_EXISTS);

        contributor.set(&caller);
        self.contributor_resources(&caller).push(&resource_id);
        self.resource_count()
            .update(|count| *count = self.checked_increment(*count));

        self.resource_added_event(&caller, &resource_id);
    }

    // ========================================================
    // ENDPOINT: rateResource
    // One vote per (voter, resource). The three tallies move together.
    // ========================================================

    #[endpoint(rateResource)]
    fn rate_resource(&self, resource_id: ResourceId<Self::Api>) {
        let caller = self.blockchain().get_caller();
        self.require_staked(&caller);

        let contributor_mapper = self.resource_contributor(&resource_id);
        require!(!contributor_mapper.is_empty(), ERR_UNKNOWN_RESOURCE);
        let contributor = contributor_mapper.get();
        require!(caller != contributor, ERR_SELF_RATING);

        let has_rated = self.has_rated(&caller, &resource_id);
        require!(!has_rated.get(), ERR_DUPLICATE_VOTE);
        require!(
            self.rate_unstaked_contributors().get() || self.is_staked(&contributor),
            ERR_CONTRIBUTOR_NOT_STAKED
        );

        self.settle_contributor(&contributor);

        has_rated.set(true);
        self.resource_votes(&resource_id)
            .update(|votes| *votes = self.checked_increment(*votes));
        self.contributor_votes(&contributor)
            .update(|votes| *votes = self.checked_increment(*votes));
        self.total_votes()
            .update(|votes| *votes = self.checked_increment(*votes));

        self.rated_event(&caller, &resource_id, &contributor);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Zero address when the resource is not registered.
    #[view(getResourceContributor)]
    fn get_resource_contributor(&self, resource_id: &ResourceId<Self::Api>) -> ManagedAddress {
        let contributor = self.resource_contributor(resource_id);
        if contributor.is_empty() {
            return ManagedAddress::zero();
        }
        contributor.get()
    }

    #[view(getResource)]
    fn get_resource(&self, resource_id: &ResourceId<Self::Api>) -> Resource<Self::Api> {
        let contributor = self.resource_contributor(resource_id);
        require!(!contributor.is_empty(), ERR_UNKNOWN_RESOURCE);

        Resource {
            id: resource_id.clone(),
            contributor: contributor.get(),
            votes: self.resource_votes(resource_id).get(),
        }
    }

    #[view(getResourceVotes)]
    fn get_resource_votes(&self, resource_id: &ResourceId<Self::Api>) -> u64 {
        self.resource_votes(resource_id).get()
    }

    #[view(getContributorVotes)]
    fn get_contributor_votes(&self, contributor: &ManagedAddress) -> u64 {
        self.contributor_votes(contributor).get()
    }

    #[view(getTotalVotes)]
    fn get_total_votes(&self) -> u64 {
        self.total_votes().get()
    }

    #[view(hasRated)]
    fn has_rated_resource(
        &self,
        voter: &ManagedAddress,
        resource_id: &ResourceId<Self::Api>,
    ) -> bool {
        self.has_rated(voter, resource_id).get()
    }

    #[view(getResourceCount)]
    fn get_resource_count(&self) -> u64 {
        self.resource_count().get()
    }

    #[view(getContributorResources)]
    fn get_contributor_resources(
        &self,
        contributor: &ManagedAddress,
    ) -> MultiValueEncoded<ResourceId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for resource_id in self.contributor_resources(contributor).iter() {
            result.push(resource_id);
        }
        result
    }
}
