/// Round `value` up to multiple of `align`.
/// `align` must be power of two.
/// Returns `None` on overflow.
pub(crate) fn aligned(value: u64, align: u64) -> Option<u64> {
    debug_assert!(align.is_power_of_two());
    if value == 0 {
        Some(0)
    } else {
        ((value - 1) | (align - 1)).checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::aligned;

    #[test]
    fn align_up() {
        assert_eq!(aligned(0, 16), Some(0));
        assert_eq!(aligned(1, 16), Some(16));
        assert_eq!(aligned(16, 16), Some(16));
        assert_eq!(aligned(17, 8), Some(24));
        assert_eq!(aligned(5, 1), Some(5));
    }

    #[test]
    fn align_overflow() {
        assert_eq!(aligned(u64::max_value(), 16), None);
        assert_eq!(aligned(u64::max_value(), 1), Some(u64::max_value()));
    }
}
