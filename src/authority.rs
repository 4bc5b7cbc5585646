multiversx_sc::imports!();

use crate::errors::{ERR_LAST_AUTHORITY, ERR_UNAUTHORIZED};

/// Capability set of principals allowed to inject yield. The owner manages
/// membership; the distributor only asks whether a caller holds the capability.
#[multiversx_sc::module]
pub trait AuthorityModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[only_owner]
    #[endpoint(addYieldAuthority)]
    fn add_yield_authority(&self, authority: ManagedAddress) {
        if self.yield_authorities().insert(authority.clone()) {
            self.yield_authority_added_event(&authority);
        }
    }

    #[only_owner]
    #[endpoint(removeYieldAuthority)]
    fn remove_yield_authority(&self, authority: ManagedAddress) {
        let mut authorities = self.yield_authorities();
        if !authorities.contains(&authority) {
            return;
        }
        require!(authorities.len() > 1, ERR_LAST_AUTHORITY);

        authorities.swap_remove(&authority);
        self.yield_authority_removed_event(&authority);
    }

    fn require_yield_authority(&self, principal: &ManagedAddress) {
        require!(self.is_yield_authority(principal), ERR_UNAUTHORIZED);
    }

    #[view(isYieldAuthority)]
    fn is_yield_authority(&self, principal: &ManagedAddress) -> bool {
        self.yield_authorities().contains(principal)
    }

    #[view(getYieldAuthorities)]
    fn get_yield_authorities(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for authority in self.yield_authorities().iter() {
            result.push(authority);
        }
        result
    }
}
