//! Wrap-around index arithmetic.
//!
//! Every helper returns `0` for an empty list instead of dividing by zero,
//! so callers never need to special-case `total == 0`.

/// Maps any signed position onto `0..total`.
#[must_use]
pub fn wrap_index(position: i64, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let total = i64::try_from(total).unwrap_or(i64::MAX);
    // rem_euclid keeps the result non-negative for negative positions.
    usize::try_from(position.rem_euclid(total)).unwrap_or(0)
}

/// One step forward with wrap.
#[must_use]
pub fn next_index(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (current % total + 1) % total
}

/// One step backward with wrap: `(i - 1 + total) mod total`.
#[must_use]
pub fn previous_index(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (current % total + total - 1) % total
}

#[cfg(test)]
mod tests {
    use super::{next_index, previous_index, wrap_index};

    #[test]
    fn steps_wrap_at_both_ends() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(2, 5), 3);
        assert_eq!(previous_index(0, 5), 4);
        assert_eq!(previous_index(2, 5), 1);
    }

    #[test]
    fn empty_list_short_circuits_to_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
        assert_eq!(wrap_index(-7, 0), 0);
    }

    #[test]
    fn single_item_always_stays_at_zero() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn wrap_index_handles_negative_positions() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(-6, 5), 4);
        assert_eq!(wrap_index(12, 5), 2);
    }
}
