//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in sonarscope-core for the three hardware collaborators:
//!
//! - HC-SR04 ultrasonic rangefinder (trigger/echo GPIO + microsecond clock)
//! - PWM hobby servo (sweep actuator)
//! - embedded-graphics canvas adapter (radar display)

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod hcsr04;
pub mod servo;
