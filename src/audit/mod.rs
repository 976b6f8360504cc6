//! Audit journal core: record decoding, display formatting, query filter
//! building and the owned journal view state.

pub mod filter;
pub mod format;
pub mod record;
pub mod view;
