//! Board-agnostic rendering and flush pipeline for the Pinax panel firmware
//!
//! This crate contains everything between widget state and the display
//! bus, with no dependency on specific hardware:
//!
//! - Screen-space geometry (dirty rectangles, band splitting)
//! - Scratch draw buffer for band-by-band repaints
//! - Pixel transport trait (the bus seam drivers implement)
//! - Flush adapter (one transaction per dirty region)
//! - Band surface (`embedded-graphics` draw target)
//! - Label widget and the retained UI engine
//!
//! All of it runs on the host under plain `cargo test`; the firmware
//! crate binds it to real SPI hardware.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod flush;
pub mod geometry;
pub mod label;
pub mod surface;
pub mod transport;
pub mod ui;
