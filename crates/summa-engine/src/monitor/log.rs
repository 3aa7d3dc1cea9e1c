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

use crate::error::OverflowDetected;
use crate::monitor::sum_monitor::SumMonitor;
use crate::stats::SumStatistics;
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};
use summa_core::math::span::InclusiveSpan;

/// A monitor that prints a throttled progress table of the accumulation to
/// stdout. Intended for long-running sums over wide spans; the per-term
/// callback is cheap because the wall clock is only consulted every
/// `clock_check_mask + 1` terms.
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    span: Option<InclusiveSpan<T>>,
}

impl<T> LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            span: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<20} | {:<20}",
            "Elapsed", "Terms", "Current Term", "Partial Sum"
        );
        println!("{}", "-".repeat(71));
    }

    #[inline(always)]
    fn log_line(&mut self, term: T, partial: T, statistics: &SumStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<20} | {:<20}",
            elapsed_field, statistics.terms_accumulated, term, partial
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SumMonitor<T> for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed + Send + Sync,
{
    fn on_enter_sum(&mut self, span: InclusiveSpan<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.span = Some(span);
        println!("Summing span {} ({} terms)", span, span.count());
        self.print_header();
    }

    fn on_accumulate(&mut self, term: T, partial: T, statistics: &SumStatistics) {
        if (statistics.terms_accumulated & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(term, partial, statistics);
        }
    }

    fn on_overflow(&mut self, error: &OverflowDetected<T>, _statistics: &SumStatistics) {
        println!("{}", "-".repeat(71));
        println!("{}", error);
    }

    fn on_exit_sum(&mut self, statistics: &SumStatistics) {
        println!("{}", "-".repeat(71));
        match self.span.take() {
            Some(span) => println!(
                "Summation of {} finished after {} terms.",
                span, statistics.terms_accumulated
            ),
            None => println!("Summation finished."),
        }
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
