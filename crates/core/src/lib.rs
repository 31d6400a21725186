//! Domain logic for asset tracking: validation, status resolution, insights
//! and output formatting. Pure functions only; no I/O and no shared state.

pub mod asset;
pub mod clock;
pub mod date;
pub mod error;
pub mod insights;
pub mod output;
pub mod status;
pub mod validation;
