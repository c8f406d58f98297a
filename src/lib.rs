// Copyright 2026 Skillrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! Skillrank library — rank skill publishers on skills.sh.
//!
//! The pipeline is one pass: acquire the page ([`fetch`]), pull the inlined
//! push fragments out of the HTML ([`extract`]), locate the skills payload
//! inside them ([`payload`]), normalize raw records ([`skills`]), then group,
//! rank, and render ([`rank`]). This library crate exposes the pipeline
//! modules for integration testing.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod payload;
pub mod rank;
pub mod skills;
