//! # Conveyorkit Core
//!
//! Core types and utilities for the conveyor configurator.
//! Provides the parameter model, product-line (SKU) definitions,
//! dimension derivation, and accessory validation rules that the
//! placement engine builds on.
//!
//! Everything in this crate is pure and total: no I/O, no shared
//! mutable state, no panics on bad input. Validation surfaces as
//! [`Validation`] values so the calling UI decides how to react.

pub mod constants;
pub mod dimensions;
pub mod error;
pub mod model;
pub mod params;
pub mod units;

pub use dimensions::{
    calculate_dimensions, validate_side_guide_height, validate_stop_button_count, Dimensions,
    Validation,
};
pub use error::ConfigError;
pub use model::{
    ConveyorModel, EndPreference, EngineType, RailSide, StopButtonLimits, StopButtonSide,
};
pub use params::{ConveyorParams, SideGuideParams, StopButtonParams};
pub use units::{format_length, mm_to_scene, scene_to_mm, MM_PER_SCENE_UNIT};
