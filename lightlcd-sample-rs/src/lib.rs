//! Shared state for the ambient-light graph.
//!
//! The [`pipeline`] module holds everything that crosses the boundary
//! between the ADC sampler and the display loop: the scaling transform,
//! the single-slot [`LatestSample`](pipeline::LatestSample) cell, the
//! graph [`Cursor`](pipeline::Cursor) and the display-mode controller.
//!
//! # Crate Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations on the public types.

#![no_std]

pub mod pipeline;
