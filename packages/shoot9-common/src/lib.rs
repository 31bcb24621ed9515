pub mod manifest;
pub mod payout;
pub mod types;

pub use manifest::{compute_manifest_hash, manifest_hash_hex, verify_manifest};
pub use payout::{
    plan_resolution, protocol_fee, PayoutError, ResolutionPlan, MAX_WINNERS, PROTOCOL_FEE_PERCENT,
};
pub use types::{ContestStatus, EventStatus, WinnerPayout};
