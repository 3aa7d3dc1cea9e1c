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
use crate::stats::SumStatistics;

/// The result of a summation run: the tagged numeric result paired with the
/// statistics collected along the way.
///
/// A successful sum and an overflow failure are unambiguously distinct
/// variants of the inner `Result`; no sentinel value overlaps valid sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumOutcome<T> {
    result: Result<T, OverflowDetected<T>>,
    statistics: SumStatistics,
}

impl<T> SumOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn new(result: Result<T, OverflowDetected<T>>, statistics: SumStatistics) -> Self {
        Self { result, statistics }
    }

    /// The tagged result of the run.
    #[inline]
    pub fn result(&self) -> &Result<T, OverflowDetected<T>> {
        &self.result
    }

    /// The statistics collected during the run.
    #[inline]
    pub fn statistics(&self) -> &SumStatistics {
        &self.statistics
    }

    /// Returns `true` if the run stopped with an overflow.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.result.is_err()
    }

    /// The successful sum, if the run completed.
    #[inline]
    pub fn value(&self) -> Option<T> {
        self.result.ok()
    }

    /// The overflow failure, if the run stopped early.
    #[inline]
    pub fn error(&self) -> Option<&OverflowDetected<T>> {
        self.result.as_ref().err()
    }

    /// Discards the statistics and yields the bare tagged result.
    #[inline]
    pub fn into_result(self) -> Result<T, OverflowDetected<T>> {
        self.result
    }
}

impl<T> std::fmt::Display for SumOutcome<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(total) => write!(f, "Sum({})", total),
            Err(error) => write!(
                f,
                "Overflow(partial={}, term={})",
                error.partial(),
                error.term()
            ),
        }
    }
}
