//! Contains functions for casting typed data into capture memory payloads.
//!
//! Captured memory is always little-endian regardless of the host,
//! so two captures of the same client code are byte-for-byte identical.

/// Plain value that can be laid out in capture memory.
pub trait Element: Copy {
    /// Size of one element in bytes.
    const SIZE: usize;

    /// Append little-endian representation of the value to `out`.
    fn write_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_element!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl Element for bool {
    const SIZE: usize = 1;

    #[inline]
    fn write_le(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }
}

/// Cast slice of elements into little-endian bytes.
pub fn cast_slice_le<T: Element>(slice: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::SIZE * slice.len());
    for &element in slice {
        element.write_le(&mut out);
    }
    debug_assert_eq!(out.len(), T::SIZE * slice.len());
    out
}

/// Cast string into NUL-terminated bytes, the way C APIs expect to read it.
pub fn cast_c_str(string: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(string.len() + 1);
    out.extend_from_slice(string.as_bytes());
    out.push(0);
    out
}
