//! Scheme selection and next-load policies.
//!
//! - [`SchemeSelector`] — Weighted categorical sampling over the five schemes
//! - [`select_next_load`] — Applies a scheme's policy to the reachable loads

mod policies;
mod selector;

pub use policies::{
    select_home, select_nearest, select_next_load, select_onway_nearest, select_random,
    select_weighted_nearest,
};
pub use selector::{Scheme, SchemeSelector};
