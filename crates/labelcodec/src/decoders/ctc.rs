//! # CTC Collapse
//!
//! Collapses a raw per-timestep code sequence into a label sequence:
//! a position survives when it differs from its predecessor, and is not
//! the null code. The first position survives unless it is the blank.

use crate::types::CodeType;

/// Collapse a code sequence under the CTC rule.
///
/// ## Arguments
/// * `codes` - the raw per-timestep codes.
/// * `blank` - the blank code, which may not open a sequence.
/// * `null` - the code removed everywhere.
///
/// ## Returns
/// The surviving codes, in order.
pub fn ctc_collapse<T: CodeType>(
    codes: &[T],
    blank: Option<T>,
    null: Option<T>,
) -> Vec<T> {
    let mut kept = Vec::with_capacity(codes.len());
    let mut prev: Option<T> = None;
    for &code in codes {
        let fresh = match prev {
            None => Some(code) != blank,
            Some(p) => p != code,
        };
        if fresh && Some(code) != null {
            kept.push(code);
        }
        prev = Some(code);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        type T = u32;
        let blank: Option<T> = Some(9);

        assert!(ctc_collapse::<T>(&[], blank, blank).is_empty());

        assert_eq!(
            ctc_collapse::<T>(&[9, 1, 1, 9, 2, 2, 2], blank, blank),
            vec![1, 2]
        );

        // A blank between repeats splits them.
        assert_eq!(ctc_collapse::<T>(&[1, 9, 1], blank, blank), vec![1, 1]);

        assert_eq!(ctc_collapse::<T>(&[9, 9, 9], blank, blank), Vec::<T>::new());
    }

    #[test]
    fn test_distinct_null() {
        type T = u32;

        // Null 0 is dropped; the blank still may not open the sequence.
        assert_eq!(
            ctc_collapse::<T>(&[9, 0, 1, 1, 9, 0, 2], Some(9), Some(0)),
            vec![1, 9, 2]
        );
    }

    #[test]
    fn test_no_blank() {
        type T = u16;
        assert_eq!(ctc_collapse::<T>(&[3, 3, 4, 3], None, None), vec![3, 4, 3]);
    }
}
