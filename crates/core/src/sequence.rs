//! Numeric recurrences behind the `fib` and `pascal` operators
//!
//! Both take a row/sequence index that has already been validated with
//! [`sequence_index`] and return `f64`. Large indices lose integer precision
//! the way repeated floating-point arithmetic does; once the running value
//! overflows to infinity the loop stops, since it can only stay infinite.

/// Interpret a stack value as a sequence index
///
/// Returns `None` unless the value is finite, non-negative and has no
/// fractional part. Values beyond `u64::MAX` saturate, which is harmless
/// because both recurrences overflow long before that.
pub fn sequence_index(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Some(value as u64)
    } else {
        None
    }
}

/// The nth Fibonacci number: fib(0) = 0, fib(1) = 1, fib(k) = fib(k-1) + fib(k-2)
pub fn fibonacci(n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }

    let (mut prev, mut current) = (0.0_f64, 1.0_f64);
    for _ in 2..=n {
        let next = prev + current;
        prev = current;
        current = next;
        if current.is_infinite() {
            break;
        }
    }
    current
}

/// Sum of row `n` of the binomial triangle
///
/// Walks the row with the multiplicative recurrence
/// `C(n, k+1) = C(n, k) * (n - k) / (k + 1)` instead of computing `2^n`
/// directly, so the low bits follow the recurrence's rounding.
pub fn pascal_row_sum(n: u64) -> f64 {
    let mut sum = 0.0_f64;
    let mut value = 1.0_f64;
    for k in 0..=n {
        sum += value;
        if sum.is_infinite() {
            break;
        }
        value = value * (n - k) as f64 / (k + 1) as f64;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_index_accepts_whole_numbers() {
        assert_eq!(sequence_index(0.0), Some(0));
        assert_eq!(sequence_index(-0.0), Some(0));
        assert_eq!(sequence_index(10.0), Some(10));
        assert_eq!(sequence_index(1e6), Some(1_000_000));
    }

    #[test]
    fn test_sequence_index_rejects_bad_values() {
        assert_eq!(sequence_index(-1.0), None);
        assert_eq!(sequence_index(2.5), None);
        assert_eq!(sequence_index(f64::NAN), None);
        assert_eq!(sequence_index(f64::INFINITY), None);
    }

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), 0.0);
        assert_eq!(fibonacci(1), 1.0);
        assert_eq!(fibonacci(2), 1.0);
        assert_eq!(fibonacci(10), 55.0);
    }

    #[test]
    fn test_fibonacci_recurrence() {
        for n in 2..=80 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2), "n = {}", n);
        }
    }

    #[test]
    fn test_fibonacci_overflow_is_infinite() {
        assert!(fibonacci(1476).is_finite());
        assert_eq!(fibonacci(1477), f64::INFINITY);
        // Terminates once the value overflows
        assert_eq!(fibonacci(u64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_pascal_small_rows() {
        assert_eq!(pascal_row_sum(0), 1.0);
        assert_eq!(pascal_row_sum(1), 2.0);
        assert_eq!(pascal_row_sum(4), 16.0);
        assert_eq!(pascal_row_sum(10), 1024.0);
    }

    #[test]
    fn test_pascal_matches_power_of_two() {
        // Intermediate products stay below 2^53 here, so the sum is exact
        for n in 0..=50 {
            assert_eq!(pascal_row_sum(n), 2f64.powi(n as i32), "n = {}", n);
        }
        for n in [100_u64, 250, 500, 1000] {
            let expected = 2f64.powi(n as i32);
            let relative = ((pascal_row_sum(n) - expected) / expected).abs();
            assert!(relative < 1e-9, "n = {}: relative error {}", n, relative);
        }
    }

    #[test]
    fn test_pascal_keeps_recurrence_rounding() {
        // The rounded binomial terms do not sum to exactly 2^n past n = 54
        assert_eq!(pascal_row_sum(55), 36_028_797_018_963_952.0);
        assert_ne!(pascal_row_sum(55), 2f64.powi(55));
        assert_eq!(pascal_row_sum(56), 72_057_594_037_927_968.0);
        assert_ne!(pascal_row_sum(56), 2f64.powi(56));
    }

    #[test]
    fn test_pascal_huge_row_terminates() {
        assert_eq!(pascal_row_sum(u64::MAX), f64::INFINITY);
    }
}
