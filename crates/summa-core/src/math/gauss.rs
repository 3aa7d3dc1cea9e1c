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

use crate::math::span::InclusiveSpan;
use num_traits::{PrimInt, Signed};

/// Computes the exact sum of an `InclusiveSpan` with the closed-form
/// (Gauss) formula `n * (min + max) / 2`, evaluated in 128-bit arithmetic.
///
/// For spans over integer types of up to 64 bits the result is always
/// exact and always representable, so `Some` is guaranteed. For 128-bit
/// spans, `None` is returned when a bound or an intermediate product does
/// not fit in `i128`.
///
/// This is the reference computation against which iteration-based summers
/// are validated: it reports the true mathematical sum independent of the
/// accumulator width a summer would use.
///
/// # Examples
///
/// ```rust
/// # use summa_core::math::gauss::gauss_sum;
/// # use summa_core::math::span::InclusiveSpan;
///
/// assert_eq!(gauss_sum(InclusiveSpan::new(1, 5)), Some(15));
/// assert_eq!(gauss_sum(InclusiveSpan::new(-3, 3)), Some(0));
/// assert_eq!(gauss_sum(InclusiveSpan::new(5, 1)), Some(0)); // Empty span
/// ```
pub fn gauss_sum<T>(span: InclusiveSpan<T>) -> Option<i128>
where
    T: PrimInt + Signed,
{
    if span.is_empty() {
        return Some(0);
    }

    let lo = InclusiveSpan::min(&span).to_i128()?;
    let hi = InclusiveSpan::max(&span).to_i128()?;

    let n = hi.checked_sub(lo)?.checked_add(1)?;
    let ends = lo.checked_add(hi)?;

    // Exactly one factor of n * (lo + hi) is guaranteed even, so halving
    // that factor first keeps the division exact and the product small.
    if n % 2 == 0 {
        (n / 2).checked_mul(ends)
    } else {
        n.checked_mul(ends / 2)
    }
}
