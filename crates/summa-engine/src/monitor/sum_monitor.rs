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

use crate::{error::OverflowDetected, stats::SumStatistics};
use num_traits::{PrimInt, Signed};
use summa_core::math::span::InclusiveSpan;

/// Trait for observing the accumulation loop of the summer.
///
/// Monitors observe and never steer: no callback returns a value that could
/// alter the accumulation, so attaching or removing monitors cannot change
/// the numeric outcome of a run. All callbacks default to doing nothing;
/// implementors override only the events they care about.
pub trait SumMonitor<T>: Send + Sync
where
    T: PrimInt + Signed,
{
    /// Called once before the accumulation loop begins.
    fn on_enter_sum(&mut self, _span: InclusiveSpan<T>) {}

    /// Called after every successfully absorbed term, with the term and the
    /// partial total including it.
    fn on_accumulate(&mut self, _term: T, _partial: T, _statistics: &SumStatistics) {}

    /// Called when the next addition was refused and the run stops.
    fn on_overflow(&mut self, _error: &OverflowDetected<T>, _statistics: &SumStatistics) {}

    /// Called when the run is finished (completed or stopped on overflow).
    fn on_exit_sum(&mut self, _statistics: &SumStatistics) {}

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<'a, T> std::fmt::Debug for dyn SumMonitor<T> + 'a
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SumMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn SumMonitor<T> + 'a
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SumMonitor({})", self.name())
    }
}
