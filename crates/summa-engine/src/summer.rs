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

//! # Overflow-Safe Range Summer
//!
//! The accumulation engine: sums every integer of an inclusive span in
//! ascending order, detecting an impending overflow *before* the addition
//! that would cause it. Detection is the engine's job; what happens on
//! detection (exit, log, retry with a wider type) is the caller's.
//!
//! ## Motivation
//!
//! A wrapped accumulator is worse than a failed one: it reports a plausible
//! but wrong number. Routing every step through the checked addition
//! primitive turns the silent wrap into a typed failure that carries the
//! partial total and the offending term.
//!
//! ## Highlights
//!
//! - Ascending iteration over `InclusiveSpan`, zero iterations for an
//!   inverted (empty) span.
//! - Check-then-add on every step; the check itself cannot overflow.
//! - Stops at the first failing step, in either direction of the number
//!   line.
//! - Pluggable observation monitors via `RangeSummerBuilder`; attaching
//!   monitors never changes the numeric outcome.
//!
//! ## Usage
//!
//! ```rust
//! use summa_core::math::span::InclusiveSpan;
//! use summa_engine::summer::{sum, RangeSummerBuilder};
//!
//! // Minimal surface: two bounds in, tagged result out.
//! assert_eq!(sum(1i64, 5), Ok(15));
//!
//! // Engine surface: outcome with statistics.
//! let mut summer = RangeSummerBuilder::<i64>::new().build();
//! let outcome = summer.sum(InclusiveSpan::new(-3, 3));
//! assert_eq!(outcome.value(), Some(0));
//! assert_eq!(outcome.statistics().terms_accumulated, 7);
//! ```

use crate::{
    error::OverflowDetected,
    monitor::{composite::CompositeSumMonitor, sum_monitor::SumMonitor},
    num::SumNumeric,
    outcome::SumOutcome,
    stats::SumStatistics,
};
use summa_core::math::span::InclusiveSpan;

/// Computes the sum of all integers in `[min, max]`, or fails with
/// `OverflowDetected` at the first step whose addition would leave the
/// representable range of `T`.
///
/// Any pair of bounds is a valid input: `min > max` denotes the empty
/// range and sums to zero. The failure is deterministic in the inputs and
/// carries the partial total and the refused term.
///
/// # Examples
///
/// ```rust
/// use summa_engine::summer::sum;
///
/// assert_eq!(sum(1i32, 5), Ok(15));
/// assert_eq!(sum(5i32, 1), Ok(0));
/// assert_eq!(sum(-3i32, 3), Ok(0));
/// assert!(sum(1i32, i32::MAX).is_err());
/// ```
#[inline]
pub fn sum<T>(min: T, max: T) -> Result<T, OverflowDetected<T>>
where
    T: SumNumeric,
{
    RangeSummer::new().sum(InclusiveSpan::new(min, max)).into_result()
}

/// The summation engine: owns the monitor stack and runs the accumulation
/// loop over inclusive spans.
///
/// Separate invocations share no state; a single summer can be reused for
/// any number of spans.
pub struct RangeSummer<'a, T>
where
    T: SumNumeric,
{
    monitors: CompositeSumMonitor<'a, T>,
}

impl<'a, T> RangeSummer<'a, T>
where
    T: SumNumeric,
{
    /// Creates a summer with no monitors attached.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: CompositeSumMonitor::new(),
        }
    }

    /// Attaches a monitor. Monitors observe the run in insertion order and
    /// cannot influence the numeric outcome.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SumMonitor<T> + 'a,
    {
        self.monitors.add_monitor(monitor);
    }

    /// Attaches a boxed monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SumMonitor<T> + 'a>) {
        self.monitors.add_monitor_boxed(monitor);
    }

    /// Sums every integer of `span` in ascending order.
    ///
    /// Returns a `SumOutcome` whose result is either the completed sum or
    /// the `OverflowDetected` failure raised at the exact first step whose
    /// addition would have left the representable range. The accumulation
    /// performs no further work past that step.
    pub fn sum(&mut self, span: InclusiveSpan<T>) -> SumOutcome<T> {
        let start_time = std::time::Instant::now();
        let mut statistics = SumStatistics::default();

        self.monitors.on_enter_sum(span);

        let mut total = T::ZERO;
        for term in span {
            match total.checked_add_val(term) {
                Some(next) => {
                    total = next;
                    statistics.terms_accumulated += 1;
                    self.monitors.on_accumulate(term, total, &statistics);
                }
                None => {
                    let error = OverflowDetected::new(total, term);
                    statistics.sum_duration = start_time.elapsed();
                    self.monitors.on_overflow(&error, &statistics);
                    self.monitors.on_exit_sum(&statistics);
                    return SumOutcome::new(Err(error), statistics);
                }
            }
        }

        statistics.sum_duration = start_time.elapsed();
        self.monitors.on_exit_sum(&statistics);
        SumOutcome::new(Ok(total), statistics)
    }
}

impl<T> Default for RangeSummer<'_, T>
where
    T: SumNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RangeSummer`.
pub struct RangeSummerBuilder<'a, T>
where
    T: SumNumeric,
{
    monitors: Vec<Box<dyn SumMonitor<T> + 'a>>,
}

impl<'a, T> Default for RangeSummerBuilder<'a, T>
where
    T: SumNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> RangeSummerBuilder<'a, T>
where
    T: SumNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SumMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
        self
    }

    #[inline]
    pub fn build(self) -> RangeSummer<'a, T> {
        RangeSummer {
            monitors: CompositeSumMonitor::from_vec(self.monitors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{log::LogMonitor, no_op::NoOperationMonitor};
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};
    use summa_core::math::gauss::gauss_sum;

    struct RecordingMonitor {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl SumMonitor<i32> for RecordingMonitor {
        fn on_enter_sum(&mut self, span: InclusiveSpan<i32>) {
            self.events.lock().unwrap().push(format!("enter {}", span));
        }

        fn on_accumulate(&mut self, term: i32, partial: i32, _statistics: &SumStatistics) {
            self.events
                .lock()
                .unwrap()
                .push(format!("accumulate {} -> {}", term, partial));
        }

        fn on_overflow(&mut self, error: &OverflowDetected<i32>, _statistics: &SumStatistics) {
            self.events.lock().unwrap().push(format!(
                "overflow partial={} term={}",
                error.partial(),
                error.term()
            ));
        }

        fn on_exit_sum(&mut self, _statistics: &SumStatistics) {
            self.events.lock().unwrap().push("exit".to_string());
        }

        fn name(&self) -> &str {
            "RecordingMonitor"
        }
    }

    #[test]
    fn test_ascending_span() {
        assert_eq!(sum(1, 5), Ok(15));
        assert_eq!(sum(1, 100), Ok(5050));
    }

    #[test]
    fn test_inverted_span_sums_to_zero() {
        assert_eq!(sum(5, 1), Ok(0));
        assert_eq!(sum(1, -1), Ok(0));
        assert_eq!(sum(i32::MAX, i32::MIN), Ok(0));
    }

    #[test]
    fn test_symmetric_span_sums_to_zero() {
        assert_eq!(sum(-3, 3), Ok(0));
    }

    #[test]
    fn test_zero_singleton() {
        assert_eq!(sum(0, 0), Ok(0));
    }

    #[test]
    fn test_singleton_sums_to_its_element() {
        assert_eq!(sum(7, 7), Ok(7));
        assert_eq!(sum(-5, -5), Ok(-5));
        assert_eq!(sum(i32::MAX, i32::MAX), Ok(i32::MAX));
        assert_eq!(sum(i32::MIN, i32::MIN), Ok(i32::MIN));
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(sum(-10, -4), Ok(-49));
        assert_eq!(sum(-100, 50), Ok(-3775));
    }

    #[test]
    fn test_triangular_boundary_succeeds() {
        // 65535 is the largest n with n * (n + 1) / 2 representable in i32.
        assert_eq!(sum(0i32, 65_535), Ok(2_147_450_880));
    }

    #[test]
    fn test_triangular_boundary_fails_at_first_overflowing_step() {
        let error = sum(0i32, 65_536).unwrap_err();
        assert_eq!(error.partial(), 2_147_450_880);
        assert_eq!(error.term(), 65_536);
    }

    #[test]
    fn test_sum_to_type_maximum_overflows() {
        let error = sum(1i32, i32::MAX).unwrap_err();
        // Identical prefix to sum(0, 65536): the refused step is the same.
        assert_eq!(error.partial(), 2_147_450_880);
        assert_eq!(error.term(), 65_536);
    }

    #[test]
    fn test_heavily_negative_span_underflows() {
        let error = sum(i32::MIN, i32::MIN + 1).unwrap_err();
        assert_eq!(error.partial(), i32::MIN);
        assert_eq!(error.term(), i32::MIN + 1);
    }

    #[test]
    fn test_full_width_span_underflows_before_positive_terms() {
        // The true sum of all i8 values is -128 and would fit, but the
        // ascending partials leave the representable range immediately.
        let error = sum(i8::MIN, i8::MAX).unwrap_err();
        assert_eq!(error.partial(), i8::MIN);
        assert_eq!(error.term(), i8::MIN + 1);
    }

    #[test]
    fn test_generic_over_integer_widths() {
        assert_eq!(sum(1i8, 5), Ok(15));
        assert_eq!(sum(-3i16, 3), Ok(0));
        assert_eq!(sum(1i64, 2_000_000), Ok(2_000_001_000_000));
        assert_eq!(sum(1i128, 3), Ok(6));
    }

    #[test]
    fn test_idempotence() {
        assert_eq!(sum(-37i32, 4_100), sum(-37i32, 4_100));

        let first = sum(0i32, 65_536);
        let second = sum(0i32, 65_536);
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_statistics_count_terms() {
        let mut summer = RangeSummer::<i32>::new();

        let outcome = summer.sum(InclusiveSpan::new(1, 5));
        assert_eq!(outcome.value(), Some(15));
        assert_eq!(outcome.statistics().terms_accumulated, 5);

        let empty = summer.sum(InclusiveSpan::new(5, 1));
        assert_eq!(empty.value(), Some(0));
        assert_eq!(empty.statistics().terms_accumulated, 0);
    }

    #[test]
    fn test_statistics_on_overflow_count_absorbed_terms() {
        let mut summer = RangeSummer::<i32>::new();
        let outcome = summer.sum(InclusiveSpan::new(0, 65_536));

        assert!(outcome.is_overflow());
        // Terms 0 through 65535 were absorbed; 65536 was refused.
        assert_eq!(outcome.statistics().terms_accumulated, 65_536);
    }

    #[test]
    fn test_monitors_do_not_change_the_outcome() {
        let bare = sum(-123i32, 4_567);

        let mut summer = RangeSummerBuilder::<i32>::new()
            .with_monitor(NoOperationMonitor::new())
            .with_monitor(RecordingMonitor {
                events: Arc::new(Mutex::new(Vec::new())),
            })
            .build();
        let observed = summer.sum(InclusiveSpan::new(-123, 4_567));

        assert_eq!(observed.into_result(), bare);
    }

    #[test]
    fn test_monitor_sees_every_accumulation() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut summer = RangeSummerBuilder::<i32>::new()
            .with_monitor(RecordingMonitor {
                events: Arc::clone(&events),
            })
            .build();

        let outcome = summer.sum(InclusiveSpan::new(1, 3));
        assert_eq!(outcome.value(), Some(6));

        let recorded = events.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![
                "enter [1, 3]",
                "accumulate 1 -> 1",
                "accumulate 2 -> 3",
                "accumulate 3 -> 6",
                "exit",
            ]
        );
    }

    #[test]
    fn test_monitor_sees_empty_run_without_accumulations() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut summer = RangeSummerBuilder::<i32>::new()
            .with_monitor(RecordingMonitor {
                events: Arc::clone(&events),
            })
            .build();

        summer.sum(InclusiveSpan::new(3, 1));

        let recorded = events.lock().unwrap();
        assert_eq!(*recorded, vec!["enter [3, 1]", "exit"]);
    }

    #[test]
    fn test_monitor_sees_overflow_event() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut summer = RangeSummer::<i32>::new();
        summer.add_monitor(RecordingMonitor {
            events: Arc::clone(&events),
        });

        let outcome = summer.sum(InclusiveSpan::new(i32::MAX - 1, i32::MAX));
        assert!(outcome.is_overflow());

        let recorded = events.lock().unwrap();
        let last_two = &recorded[recorded.len() - 2..];
        assert_eq!(
            last_two,
            [
                format!("overflow partial={} term={}", i32::MAX - 1, i32::MAX),
                "exit".to_string(),
            ]
        );
    }

    #[test]
    fn test_log_monitor_smoke() {
        let mut summer = RangeSummerBuilder::<i64>::new()
            .with_monitor(LogMonitor::default())
            .build();

        let outcome = summer.sum(InclusiveSpan::new(1, 10));
        assert_eq!(outcome.value(), Some(55));
    }

    #[test]
    fn test_summer_is_reusable_across_spans() {
        let mut summer = RangeSummer::<i64>::new();
        assert_eq!(summer.sum(InclusiveSpan::new(1, 5)).value(), Some(15));
        assert_eq!(summer.sum(InclusiveSpan::new(6, 10)).value(), Some(40));
        assert_eq!(summer.sum(InclusiveSpan::new(1, 10)).value(), Some(55));
    }

    proptest! {
        #[test]
        fn matches_closed_form_oracle(min in -5_000i64..5_000, max in -5_000i64..5_000) {
            let span = InclusiveSpan::new(min, max);
            let expected = gauss_sum(span).unwrap() as i64;
            prop_assert_eq!(sum(min, max), Ok(expected));
        }

        #[test]
        fn inverted_bounds_always_sum_to_zero(min in -1_000i32..1_000, max in -1_000i32..1_000) {
            prop_assume!(min > max);
            prop_assert_eq!(sum(min, max), Ok(0));
        }

        #[test]
        fn repeated_invocations_agree(min in -2_000i32..2_000, max in -2_000i32..2_000) {
            prop_assert_eq!(sum(min, max), sum(min, max));
        }
    }
}
