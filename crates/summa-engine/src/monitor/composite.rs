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

//! Monitoring combinators for the summation loop
//!
//! Provides `CompositeSumMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging, metrics, and custom
//! recording without coupling them to the engine.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - Every callback fans out to all children; monitors cannot influence
//!   each other or the accumulation.

use crate::{error::OverflowDetected, monitor::sum_monitor::SumMonitor, stats::SumStatistics};
use num_traits::{PrimInt, Signed};
use summa_core::math::span::InclusiveSpan;

/// A summation monitor that aggregates multiple monitors and forwards
/// events to all of them. This allows combining different monitoring
/// behaviors into a single monitor.
pub struct CompositeSumMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    monitors: Vec<Box<dyn SumMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeSumMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeSumMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeSumMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSumMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeSumMonitor` from a vector of boxed monitors.
    #[inline(always)]
    pub fn from_vec(monitors: Vec<Box<dyn SumMonitor<T> + 'a>>) -> Self {
        Self { monitors }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SumMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SumMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if no child monitors are attached.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T> SumMonitor<T> for CompositeSumMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn on_enter_sum(&mut self, span: InclusiveSpan<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_sum(span);
        }
    }

    fn on_accumulate(&mut self, term: T, partial: T, statistics: &SumStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_accumulate(term, partial, statistics);
        }
    }

    fn on_overflow(&mut self, error: &OverflowDetected<T>, statistics: &SumStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_overflow(error, statistics);
        }
    }

    fn on_exit_sum(&mut self, statistics: &SumStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_sum(statistics);
        }
    }

    fn name(&self) -> &str {
        "CompositeSumMonitor"
    }
}
