//! CPF
//!
//! Brazilian individual taxpayer ids: eleven digits, the last two being check digits computed
//! modulo 11 over the preceding digits.

use std::fmt;

use thiserror::Error;

/// Number of digits in a CPF.
const CPF_LEN: usize = 11;

/// Reasons a CPF is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpfError {
    /// The input does not contain exactly eleven digits.
    #[error("CPF must have 11 digits, found {0}")]
    Length(usize),

    /// Every digit is the same, e.g. `111.111.111-11`.
    #[error("CPF digits must not all be identical")]
    RepeatedDigits,

    /// A check digit does not match the computed value.
    #[error("CPF check digits do not match")]
    CheckDigit,
}

/// Removes everything that is not an ASCII digit.
pub fn strip_punctuation(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A validated CPF, stored as its eleven bare digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Parse a CPF, with or without `###.###.###-##` punctuation.
    ///
    /// # Errors
    ///
    /// Returns a [`CpfError`] if the digit count, the digit pattern or the check digits are wrong.
    pub fn parse(input: &str) -> Result<Self, CpfError> {
        let digits: Vec<u8> = strip_punctuation(input)
            .bytes()
            .map(|byte| byte - b'0')
            .collect();

        let digits: [u8; CPF_LEN] = digits
            .as_slice()
            .try_into()
            .map_err(|_err| CpfError::Length(digits.len()))?;

        if digits.iter().all(|&digit| Some(&digit) == digits.first()) {
            return Err(CpfError::RepeatedDigits);
        }

        let (body, checks) = digits.split_at(CPF_LEN - 2);
        let first = check_digit(body);

        let mut extended = body.to_vec();
        extended.push(first);

        let second = check_digit(&extended);

        if checks != [first, second] {
            return Err(CpfError::CheckDigit);
        }

        Ok(Self(digits))
    }

    /// Check whether `input` is a valid CPF.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The eleven digits without punctuation.
    pub fn digits(&self) -> String {
        self.0.iter().map(|digit| char::from(b'0' + digit)).collect()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, digit) in self.0.iter().enumerate() {
            match idx {
                3 | 6 => f.write_str(".")?,
                9 => f.write_str("-")?,
                _ => {}
            }

            write!(f, "{digit}")?;
        }

        Ok(())
    }
}

/// Weighted sum with weights counting down to 2, folded modulo 11.
fn check_digit(digits: &[u8]) -> u8 {
    let total: usize = digits
        .iter()
        .rev()
        .zip(2..)
        .map(|(&digit, weight)| usize::from(digit) * weight)
        .sum();

    match total % 11 {
        remainder @ 2.. => u8::try_from(11 - remainder).unwrap_or(0),
        _ => 0,
    }
}
