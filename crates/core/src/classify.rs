use serde::Serialize;

use crate::policy::{ConcatCaseStart, MixedTokenPolicy, CONCAT_CASE_START, MIXED_TOKEN_POLICY};

/// Classification of one request's tokens.
///
/// All buckets preserve first-produced order. `sum` and `concat_string` are
/// rendered strings so the record serializes directly into the response body.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Classification {
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

/// Parse a token under the unsigned digits-only integer policy.
///
/// Returns `None` for anything that is not entirely ASCII digits, and for
/// digit runs that overflow `i64`. Overflowing tokens fall through to the
/// special-characters bucket.
fn parse_integer(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_mixed(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_alphabetic()) && token.bytes().any(|b| b.is_ascii_digit())
}

/// Build the concat string from the accumulated alphabet characters.
///
/// The buffer is reversed end-to-end, then re-cased by position according to
/// [`CONCAT_CASE_START`].
fn build_concat_string(letters: &[char]) -> String {
    let upper_at_even = matches!(CONCAT_CASE_START, ConcatCaseStart::UpperFirst);

    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if (i % 2 == 0) == upper_at_even {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Classify an ordered sequence of tokens.
///
/// Each token is assigned, in input order, to one of the four buckets:
///
/// 1. Entirely ASCII digits: parsed as an integer, pushed (original text) onto
///    the odd or even bucket by parity, and added to the running sum.
/// 2. Entirely ASCII letters: pushed upper-cased onto `alphabets`; each
///    character joins the concat accumulator lower-cased.
/// 3. At least one letter and at least one digit (under
///    [`MixedTokenPolicy::WholeTokenPlusDigits`]): letters join the
///    accumulator, each digit is bucketed by its own parity and added to the
///    sum, and the whole token additionally lands upper-cased in `alphabets`.
/// 4. Anything else (empty, punctuation, non-ASCII): special characters.
///
/// The function is total over its input: it never fails, never mutates the
/// tokens, and produces the same output for the same input.
pub fn classify_tokens(tokens: &[String]) -> Classification {
    let mut odd_numbers = Vec::new();
    let mut even_numbers = Vec::new();
    let mut alphabets = Vec::new();
    let mut special_characters = Vec::new();
    let mut sum: i64 = 0;
    let mut letters: Vec<char> = Vec::new();

    let decompose_mixed = matches!(MIXED_TOKEN_POLICY, MixedTokenPolicy::WholeTokenPlusDigits);

    for token in tokens {
        if let Some(n) = parse_integer(token) {
            sum += n;
            if n % 2 == 0 {
                even_numbers.push(token.clone());
            } else {
                odd_numbers.push(token.clone());
            }
        } else if is_alphabetic(token) {
            alphabets.push(token.to_uppercase());
            letters.extend(token.chars().map(|c| c.to_ascii_lowercase()));
        } else if decompose_mixed && is_mixed(token) {
            for c in token.chars() {
                if c.is_ascii_alphabetic() {
                    letters.push(c.to_ascii_lowercase());
                } else if let Some(d) = c.to_digit(10) {
                    sum += i64::from(d);
                    if d % 2 == 0 {
                        even_numbers.push(c.to_string());
                    } else {
                        odd_numbers.push(c.to_string());
                    }
                }
                // Other characters inside a mixed token contribute nothing.
            }
            // Mixed tokens also appear whole in the alphabets bucket.
            alphabets.push(token.to_uppercase());
        } else {
            special_characters.push(token.clone());
        }
    }

    Classification {
        odd_numbers,
        even_numbers,
        alphabets,
        special_characters,
        sum: sum.to_string(),
        concat_string: build_concat_string(&letters),
    }
}
