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

/// Statistics collected during a summation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SumStatistics {
    /// Number of terms successfully accumulated. On overflow this counts
    /// the terms absorbed before the refused step.
    pub terms_accumulated: u64,
    /// Total duration of the run.
    pub sum_duration: std::time::Duration,
}

impl std::fmt::Display for SumStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summation Statistics:")?;
        writeln!(f, "  Terms Accumulated: {}", self.terms_accumulated)?;
        writeln!(
            f,
            "  Sum Duration (secs): {:.6}",
            self.sum_duration.as_secs_f64()
        )
    }
}

/// Builder for `SumStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumStatisticsBuilder {
    terms_accumulated: u64,
    sum_duration: std::time::Duration,
}

impl Default for SumStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SumStatisticsBuilder {
    /// Creates a new `SumStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            terms_accumulated: 0,
            sum_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of terms accumulated.
    #[inline]
    pub fn terms_accumulated(mut self, terms_accumulated: u64) -> Self {
        self.terms_accumulated = terms_accumulated;
        self
    }

    /// Sets the total run duration.
    #[inline]
    pub fn sum_duration(mut self, sum_duration: std::time::Duration) -> Self {
        self.sum_duration = sum_duration;
        self
    }

    /// Builds the `SumStatistics` instance.
    #[inline]
    pub fn build(self) -> SumStatistics {
        SumStatistics {
            terms_accumulated: self.terms_accumulated,
            sum_duration: self.sum_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SumStatistics;
    use super::SumStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SumStatisticsBuilder::new()
            .terms_accumulated(65_536)
            .sum_duration(Duration::from_micros(1234))
            .build();

        assert_eq!(stats.terms_accumulated, 65_536);
        assert_eq!(stats.sum_duration, Duration::from_micros(1234));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SumStatistics {
            terms_accumulated: 5,
            sum_duration: Duration::from_millis(1500),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Summation Statistics:"), "missing header");
        assert!(
            rendered.contains("Terms Accumulated: 5"),
            "missing terms_accumulated"
        );
        assert!(
            rendered.contains("Sum Duration (secs): 1.500000"),
            "duration not formatted to 6 decimals"
        );
    }

    #[test]
    fn test_display_handles_zero_values() {
        let stats = SumStatistics::default();

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Terms Accumulated: 0"));
        assert!(rendered.contains("Sum Duration (secs): 0.000000"));
    }
}
