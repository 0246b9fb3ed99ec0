//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod check_availability;

pub use check_availability::{
    CheckAvailabilityAdapter, CheckAvailabilityOutput, CheckAvailabilityParams,
    CheckAvailabilityTool,
};
