// src/context.rs
// Runtime configuration handed to every stage. Tiny, Copy, 'static data only.

/// Numeral system that digit-aware stages normalize *towards*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Digits {
    /// ASCII `0`–`9`. Used for storage, search and sort keys.
    #[default]
    Latin,
    /// Extended Arabic-Indic `۰`–`۹` as written in Persian. Used for display.
    Persian,
}

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub digits: Digits,
}

impl Context {
    #[inline(always)]
    pub const fn new(digits: Digits) -> Self {
        Self { digits }
    }

    /// Context for display-oriented pipelines (Persian digits).
    #[inline(always)]
    pub const fn persian() -> Self {
        Self::new(Digits::Persian)
    }
}
