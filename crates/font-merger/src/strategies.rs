//! Field-merge strategies shared by the table mergers.

use crate::{MergeError, Result};

/// Require every font to agree; returns the shared value.
pub fn equal<T: PartialEq + Clone>(
    values: &[T],
    table: &'static str,
    field: &'static str,
) -> Result<T> {
    let (head, tail) = values.split_first().ok_or(MergeError::NoFonts)?;
    if tail.iter().all(|v| v == head) {
        Ok(head.clone())
    } else {
        Err(MergeError::NotEqual { table, field })
    }
}

/// Take the first font's value.
pub fn first<T: Clone>(values: &[T]) -> Result<T> {
    values.first().cloned().ok_or(MergeError::NoFonts)
}

/// Largest value wins.
pub fn max<T: Ord + Clone>(values: &[T]) -> Result<T> {
    values.iter().max().cloned().ok_or(MergeError::NoFonts)
}

/// Smallest value wins.
pub fn min<T: Ord + Clone>(values: &[T]) -> Result<T> {
    values.iter().min().cloned().ok_or(MergeError::NoFonts)
}

/// Merge a flag word bit by bit.
///
/// `bit_map` selects the mode per bit: `Some(true)` ORs across fonts,
/// `Some(false)` ANDs, `None` keeps the first font's bit.
pub fn merge_bits(values: &[u16], bit_map: &[Option<bool>; 16]) -> Result<u16> {
    let head = *values.first().ok_or(MergeError::NoFonts)?;
    let mut merged = 0u16;

    for (bit, mode) in bit_map.iter().enumerate() {
        let mask = 1u16 << bit;
        let set = match mode {
            Some(true) => values.iter().any(|v| v & mask != 0),
            Some(false) => values.iter().all(|v| v & mask != 0),
            None => head & mask != 0,
        };
        if set {
            merged |= mask;
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_success() {
        assert_eq!(equal(&[1000, 1000], "head", "unitsPerEm").unwrap(), 1000);
    }

    #[test]
    fn test_equal_failure() {
        assert!(equal(&[1000, 2048], "head", "unitsPerEm").is_err());
    }

    #[test]
    fn test_min_max_first() {
        let values = vec![3, 1, 2];
        assert_eq!(first(&values).unwrap(), 3);
        assert_eq!(min(&values).unwrap(), 1);
        assert_eq!(max(&values).unwrap(), 3);
    }

    #[test]
    fn test_merge_bits() {
        let mut map: [Option<bool>; 16] = [None; 16];
        map[0] = Some(true);
        map[1] = Some(false);
        assert_eq!(merge_bits(&[0b01, 0b11], &map).unwrap(), 0b01);
        assert_eq!(merge_bits(&[0b11, 0b11], &map).unwrap(), 0b11);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(first::<u16>(&[]).is_err());
        assert!(merge_bits(&[], &[None; 16]).is_err());
    }
}
