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

//! # Math Primitives
//!
//! Foundational mathematical structures for integer range summation. This
//! module focuses on inclusive span math, designed to integrate cleanly
//! with Rust's range and iterator ecosystem.
//!
//! ## Submodules
//!
//! - `span`: A generic `[min, max]` span type where an inverted pair
//!   (`min > max`) denotes the empty span, with membership and cardinality
//!   queries, ascending iteration (`Iterator`, `DoubleEndedIterator`,
//!   `ExactSizeIterator`, `FusedIterator`), and conversions to/from
//!   `std::ops::RangeInclusive`.
//! - `gauss`: The exact closed-form span sum, evaluated in 128-bit
//!   arithmetic. The reference computation that iteration-based summers
//!   are validated against.
//!
//! ## Motivation
//!
//! Summation over integer ranges is riddled with off-by-one and boundary
//! hazards: an inclusive upper bound equal to the type maximum must not
//! wrap the loop cursor, and an inverted pair of bounds must mean "empty",
//! not "error". The span type pins those semantics down once.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod gauss;
pub mod span;
