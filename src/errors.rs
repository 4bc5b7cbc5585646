// Stake registry
pub const ERR_ALREADY_STAKED: &str = "Already staked";
pub const ERR_NOT_STAKED: &str = "Not staked";
pub const ERR_WRONG_TOKEN: &str = "Wrong payment token";
pub const ERR_WRONG_STAKE_AMOUNT: &str = "Payment must equal the stake unit";

// Curation ledger
pub const ERR_RESOURCE_EXISTS: &str = "Resource hash already registered";
pub const ERR_UNKNOWN_RESOURCE: &str = "Resource not found";
pub const ERR_SELF_RATING: &str = "Cannot rate your own resource";
pub const ERR_DUPLICATE_VOTE: &str = "Already rated this resource";
pub const ERR_CONTRIBUTOR_NOT_STAKED: &str = "Contributor is no longer staked";

// Yield distribution
pub const ERR_UNAUTHORIZED: &str = "Caller is not a yield authority";
pub const ERR_ZERO_YIELD: &str = "Yield amount must be positive";
pub const ERR_NO_VOTES_YET: &str = "No votes cast yet";
pub const ERR_NO_VOTES_RECEIVED: &str = "No votes received";
pub const ERR_NO_NEW_REWARDS: &str = "No new rewards to claim";

// Configuration
pub const ERR_INVALID_TOKEN: &str = "Invalid pool token";
pub const ERR_ZERO_STAKE_UNIT: &str = "Stake unit must be positive";
pub const ERR_LAST_AUTHORITY: &str = "Cannot remove the last yield authority";

pub const ERR_OVERFLOW: &str = "Arithmetic overflow";
