//! Hardware driver implementations
//!
//! This crate provides the concrete hardware behind the pipeline
//! defined in pinax-core:
//!
//! - TFT panel transports (ST7796S over 4-wire SPI)
//! - Backlight switch (plain GPIO, active-high or active-low)
//!
//! Everything binds to blocking `embedded-hal` 1.0 traits, so the
//! drivers are board-agnostic and unit-testable on the host with mock
//! buses.

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod tft;
