// src/compute.rs
//
// The actual work behind the exported functions. Plain Rust, no raw
// pointers; the ffi layer does all the C-side conversion.

use std::ffi::CStr;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::{Result, SdkError};

/// Two's-complement wrapping addition.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Iterative Fibonacci with i64 wrapping arithmetic.
///
/// `n <= 1` returns `n` unchanged, negatives included. fib(92) is the last
/// value that fits; past that the result wraps silently.
pub fn fibonacci(n: i32) -> i64 {
    if n <= 1 {
        return n as i64;
    }

    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 2..=n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Byte length of the input, NUL excluded.
    pub length: i32,
    pub summary: String,
}

/// Summarize an opaque byte string. Bytes are never interpreted beyond a
/// lossy rendering for the summary text.
pub fn process(input: &CStr) -> Result<Processed> {
    let bytes = input.to_bytes();
    let length = i32::try_from(bytes.len()).map_err(|_| SdkError::InputTooLong(bytes.len()))?;
    let summary = format!(
        "Processed: {} (length: {length})",
        String::from_utf8_lossy(bytes)
    );
    Ok(Processed { length, summary })
}

/// Average wall time of one `add(i, i + 1)` over `iterations` calls.
pub fn benchmark_add(iterations: u32) -> Duration {
    if iterations == 0 {
        return Duration::ZERO;
    }

    let start = Instant::now();
    for i in 0..iterations {
        let i = i as i32;
        black_box(add(black_box(i), black_box(i.wrapping_add(1))));
    }
    start.elapsed() / iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_basic() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(add(-5, 3), -2);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn fibonacci_small() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(5), 5);
        assert_eq!(fibonacci(8), 21);
        assert_eq!(fibonacci(10), 55);
        for n in 2..40 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
        }
    }

    #[test]
    fn fibonacci_precision_boundary() {
        assert_eq!(fibonacci(92), 7_540_113_804_746_346_429);
        // 93 no longer fits and wraps instead of trapping
        assert_eq!(fibonacci(93), fibonacci(92).wrapping_add(fibonacci(91)));
        assert!(fibonacci(93) < 0);
    }

    #[test]
    fn fibonacci_negative_is_identity() {
        assert_eq!(fibonacci(-7), -7);
    }

    #[test]
    fn process_counts_bytes() {
        let out = process(c"Hello, Rust!").unwrap();
        assert_eq!(out.length, 12);
        assert_eq!(out.summary, "Processed: Hello, Rust! (length: 12)");
    }

    #[test]
    fn process_empty() {
        let out = process(c"").unwrap();
        assert_eq!(out.length, 0);
        assert!(out.summary.contains("length: 0"));
    }

    #[test]
    fn process_non_utf8() {
        let input = CStr::from_bytes_with_nul(b"a\xffb\0").unwrap();
        let out = process(input).unwrap();
        assert_eq!(out.length, 3);
        assert_eq!(out.summary, "Processed: a\u{fffd}b (length: 3)");
    }

    #[test]
    fn benchmark_zero_iterations() {
        assert_eq!(benchmark_add(0), Duration::ZERO);
    }

    #[test]
    fn benchmark_runs() {
        // elapsed can round to zero on a fast machine; just make sure it's sane
        assert!(benchmark_add(1_000) < Duration::from_millis(10));
    }
}
