// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Summa Engine: overflow-safe inclusive range summation
//!
//! High-level crate that implements a sequential, overflow-safe summer for
//! inclusive integer spans. The engine separates accumulation, observation,
//! and outcome handling so callers can attach instrumentation without
//! touching the core loop.
//!
//! Core flow
//! - Build an `InclusiveSpan<T>` (any pair of bounds is valid; inverted
//!   bounds denote the empty span).
//! - Call `summer::sum` for the minimal surface, or configure a
//!   `summer::RangeSummer` with monitors and receive a `SumOutcome<T>`
//!   carrying the tagged result plus statistics.
//!
//! Design highlights
//! - Check-then-add: every accumulation step goes through the checked
//!   addition primitive, so an impending overflow is detected before any
//!   wrapped value exists, in both directions of the number line.
//! - First failing step: on detection the engine stops immediately and
//!   reports the partial total together with the offending term.
//! - Monitors observe, never steer: results are identical with or without
//!   instrumentation attached.
//!
//! Module map
//! - `summer`: the accumulation engine and its builder.
//! - `monitor`: observation hooks (log, composite, no-op).
//! - `error`: the single typed failure, `OverflowDetected`.
//! - `outcome`: tagged result paired with statistics.
//! - `stats`: lightweight counters/timing.
//! - `num`: the `SumNumeric` trait alias for engine-compatible integers.

pub mod error;
pub mod monitor;
pub mod num;
pub mod outcome;
pub mod stats;
pub mod summer;
