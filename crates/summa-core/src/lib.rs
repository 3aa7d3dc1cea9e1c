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

//! # Summa Core
//!
//! Foundational numerics and math primitives for the Summa summation
//! ecosystem. This crate consolidates reusable building blocks focused on
//! overflow correctness and ergonomic APIs that underpin the higher-level
//! engine crate.
//!
//! ## Modules
//!
//! - `math`: Inclusive integer span `[min, max]` primitives with
//!   empty-when-inverted semantics, membership and cardinality queries,
//!   iteration (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`), conversions to/from `std::ops::RangeInclusive`, and
//!   an exact closed-form (Gauss) span sum in 128-bit arithmetic.
//! - `num`: Integer-centric utilities including the associated constant
//!   trait `Zero` and the by-value checked addition trait `CheckedAddVal`
//!   returning `Option<T>` on overflow.
//!
//! ## Purpose
//!
//! These primitives enable generic accumulation code that detects impending
//! fixed-width overflow before it happens, instead of inspecting a wrapped
//! value after the fact.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
