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

//! # Summation Monitors
//!
//! Observation hooks around the accumulation loop. Monitors exist for
//! callers that want diagnostics (progress tables, counters, tracing of the
//! overflow point) without placing any of that inside the engine: the loop
//! produces identical results whether zero, one, or many monitors are
//! attached.
//!
//! ## Submodules
//!
//! - `sum_monitor`: The `SumMonitor` trait with default-empty callbacks.
//! - `composite`: Fan-out monitor forwarding every event to its children.
//! - `no_op`: A monitor that ignores every event.
//! - `log`: A throttled stdout progress table.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod sum_monitor;
