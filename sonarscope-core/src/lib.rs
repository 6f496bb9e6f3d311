//! Board-agnostic core logic for the Sonarscope radar scanner
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (range sensor, sweep actuator, canvas)
//! - Sweep direction state machine and angle remapping
//! - Integer trigonometry and line geometry
//! - Echo-time to distance conversion
//! - Radar scene renderer
//! - Scan engine driving one measure/move/draw step at a time

#![no_std]
#![deny(unsafe_code)]

pub mod geom;
pub mod range;
pub mod render;
pub mod scanner;
pub mod sweep;
pub mod traits;
