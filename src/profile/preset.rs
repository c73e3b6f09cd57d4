use crate::{Digits, NormalizeDigits, RemoveSpecialChars, process::Process, profile::Profile};

/// Text about to be turned into a collation key or compared: ASCII digits
/// and no punctuation noise, whatever context it runs under.
pub fn collation() -> Profile<impl Process> {
    Profile::builder("collation")
        .digits(Digits::Latin)
        .add_stage(NormalizeDigits)
        .add_stage(RemoveSpecialChars)
        .build()
}

/// Numbers rendered with Persian numerals for display.
pub fn display() -> Profile<impl Process> {
    Profile::builder("display")
        .digits(Digits::Persian)
        .add_stage(NormalizeDigits)
        .build()
}
