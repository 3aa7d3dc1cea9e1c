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

//! # Engine Numeric Trait
//!
//! Unified numeric bounds for the summation engine. `SumNumeric` specifies
//! the integer capabilities the engine requires, including intrinsic traits
//! (`PrimInt`, `Signed`), the additive-identity constant, and the by-value
//! checked addition trait from `summa_core`.
//!
//! ## Motivation
//!
//! The accumulation loop should remain generic over integer widths while
//! retaining predictable arithmetic semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures and
//! ensuring consistent overflow handling across all supported widths.

use std::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Signed};
use summa_core::num::{constants::Zero, ops::checked_arithmetic::CheckedAddVal};

/// A trait alias for numeric types that can be summed by the engine.
/// These are the signed integer types `i8`, `i16`, `i32`, `i64`, `i128`
/// and `isize`.
pub trait SumNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + CheckedAddVal
    + Send
    + Sync
    + Hash
{
}

impl<T> SumNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + CheckedAddVal
        + Send
        + Sync
        + Hash
{
}
