use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ```
/// assert_eq!(harf::odd_or_even(-3).to_string(), "odd");
/// ```
pub const fn odd_or_even(n: i64) -> Parity {
    if n % 2 == 0 { Parity::Even } else { Parity::Odd }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(odd_or_even(0), Parity::Even);
        assert_eq!(odd_or_even(1), Parity::Odd);
        assert_eq!(odd_or_even(2).as_str(), "even");
    }

    #[test]
    fn negatives_and_extremes() {
        assert_eq!(odd_or_even(-1), Parity::Odd);
        assert_eq!(odd_or_even(-4), Parity::Even);
        assert_eq!(odd_or_even(i64::MIN), Parity::Even);
        assert_eq!(odd_or_even(i64::MAX), Parity::Odd);
    }
}
