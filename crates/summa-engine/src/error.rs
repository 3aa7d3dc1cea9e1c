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

/// The single failure of the summation engine: continuing the accumulation
/// would exceed the representable range of the accumulator type.
///
/// Carries the partial total accumulated so far and the term whose addition
/// was refused, so a caller can report exactly where the accumulation
/// stopped. Detection is deterministic in the inputs; retrying the same
/// span reproduces the same failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowDetected<T> {
    partial: T,
    term: T,
}

impl<T> OverflowDetected<T>
where
    T: Copy,
{
    /// Creates a new `OverflowDetected` from the partial total and the
    /// refused term.
    #[inline]
    pub const fn new(partial: T, term: T) -> Self {
        Self { partial, term }
    }

    /// The total accumulated before the refused step.
    #[inline]
    pub const fn partial(&self) -> T {
        self.partial
    }

    /// The term whose addition would have left the representable range.
    #[inline]
    pub const fn term(&self) -> T {
        self.term
    }
}

impl<T> std::fmt::Display for OverflowDetected<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "overflow detected: partial sum {} cannot absorb term {}",
            self.partial, self.term
        )
    }
}

impl<T> std::error::Error for OverflowDetected<T> where T: std::fmt::Debug + std::fmt::Display {}

#[cfg(test)]
mod tests {
    use super::OverflowDetected;

    #[test]
    fn test_accessors() {
        let error = OverflowDetected::new(2_147_450_880i32, 65_536);
        assert_eq!(error.partial(), 2_147_450_880);
        assert_eq!(error.term(), 65_536);
    }

    #[test]
    fn test_display() {
        let error = OverflowDetected::new(10, -3);
        assert_eq!(
            format!("{}", error),
            "overflow detected: partial sum 10 cannot absorb term -3"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let error = OverflowDetected::new(1i64, 2i64);
        assert_error(&error);
    }
}
