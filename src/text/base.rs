use std::fmt::Debug;

use num_traits::{NumCast, PrimInt, Unsigned};

use crate::{Error, Result};

/// Digit alphabet shared by [`to_base`] and [`from_base`]
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn check_radix(radix: u32) -> Result<()> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidRadix(radix))
    }
}

/// Writes `num` in base `radix`, most significant digit first, using `0-9A-Z`.
///
/// Zero is written as `"0"`. Negative numbers are rejected.
pub fn to_base<T>(num: T, radix: u32) -> Result<String>
where
    T: PrimInt + Debug,
{
    check_radix(radix)?;
    if num < T::zero() {
        return Err(Error::NegativeNumber(format!("{:?}", num)));
    }

    // radix <= 36 fits every primitive integer type
    let b = <T as NumCast>::from(radix).ok_or(Error::Overflow)?;
    let mut num = num;
    let mut digits = Vec::new();

    loop {
        let digit = (num % b).to_usize().ok_or(Error::Overflow)?;
        digits.push(ALPHABET[digit]);
        num = num / b;
        if num.is_zero() {
            break;
        }
    }

    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

/// Parses digits written in base `radix`. Letters may be upper or lower case.
pub fn from_base<T>(digits: &str, radix: u32) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    check_radix(radix)?;
    if digits.is_empty() {
        return Err(Error::EmptyInput);
    }

    let b = <T as NumCast>::from(radix).ok_or(Error::Overflow)?;
    digits.chars().try_fold(T::zero(), |acc, c| {
        let value = c
            .to_digit(radix)
            .ok_or(Error::InvalidDigit { digit: c, radix })?;
        let value = <T as NumCast>::from(value).ok_or(Error::Overflow)?;
        acc.checked_mul(&b)
            .and_then(|shifted| shifted.checked_add(&value))
            .ok_or(Error::Overflow)
    })
}
