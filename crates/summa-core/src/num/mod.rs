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

//! # Numeric Foundations
//!
//! Traits for integer-centric accumulation code. This module consolidates a
//! compile-time constant and a by-value arithmetic trait that mirror Rust's
//! intrinsic behaviors while providing uniform, generic APIs.
//!
//! ## Submodules
//!
//! - `constants`: The associated-constant trait `Zero`, implemented for all
//!   core integer types to access the additive identity in a type-safe,
//!   self-describing way.
//! - `ops`: The checked addition trait (by value), enabling predictable
//!   overflow handling through `Option<T>` instead of wrapped values.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod ops;
