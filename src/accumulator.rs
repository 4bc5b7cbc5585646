//! Fixed-point reward-per-vote arithmetic.
//!
//! The pool tracks one global accumulator, `yield_per_vote`, scaled by
//! [`SCALE`]. A contributor holding `v` votes between two accumulator values
//! `a0 <= a1` is owed `v * (a1 - a0) / SCALE`. Both directions floor, so the
//! pool never pays out more than was injected.

multiversx_sc::imports!();

/// Decimal exponent of the fixed-point scale (10^18).
pub const SCALE_EXPONENT: u32 = 18;

pub fn scale<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(10u64.pow(SCALE_EXPONENT))
}

/// `amount * SCALE / votes`, floored. Returns `None` when there are no votes
/// to share the amount among.
pub fn scale_amount_by_votes<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    votes: u64,
) -> Option<BigUint<M>> {
    if votes == 0 {
        return None;
    }
    Some((amount * &scale::<M>()) / votes)
}

/// `scaled * votes / SCALE`, floored.
pub fn unscale<M: ManagedTypeApi>(scaled: &BigUint<M>, votes: u64) -> BigUint<M> {
    (scaled * votes) / scale::<M>()
}

/// Rewards accrued by `votes` votes while the accumulator moved from
/// `checkpoint` to `yield_per_vote`.
pub fn pending_rewards<M: ManagedTypeApi>(
    yield_per_vote: &BigUint<M>,
    checkpoint: &BigUint<M>,
    votes: u64,
) -> BigUint<M> {
    if votes == 0 || yield_per_vote <= checkpoint {
        return BigUint::zero();
    }
    let delta = yield_per_vote - checkpoint;
    unscale(&delta, votes)
}
