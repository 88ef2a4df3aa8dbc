//! # Strata Utils
//!
//! Seeded random sources and coherent noise primitives shared by the
//! Strata terrain generator.
#![allow(clippy::unreadable_literal)]

pub mod noise;
pub mod random;
