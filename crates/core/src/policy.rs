//! Named constants resolving the classifier's behavioral choices
//!
//! Deployments of this service disagree on two points: how mixed alphanumeric
//! tokens are decomposed, and which case the alternating concat string starts
//! with. Both choices are encoded here as enums with a single crate-wide
//! selection, so the shipped behavior is visible in one place.

/// How a token containing both letters and digits is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedTokenPolicy {
    /// Mixed tokens are not decomposed and classify as special characters.
    Disabled,
    /// Mixed tokens contribute their digits to the odd/even buckets and the
    /// running sum, their letters to the concat accumulator, and the whole
    /// token (upper-cased) to the alphabets bucket.
    WholeTokenPlusDigits,
}

/// Which case position 0 of the reversed concat buffer is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatCaseStart {
    UpperFirst,
    LowerFirst,
}

/// The mixed-token behavior this crate ships with.
pub const MIXED_TOKEN_POLICY: MixedTokenPolicy = MixedTokenPolicy::WholeTokenPlusDigits;

/// The alternation start this crate ships with.
pub const CONCAT_CASE_START: ConcatCaseStart = ConcatCaseStart::UpperFirst;
