//! Fixed-size arrays.

/// Trait for fixed size arrays used as `RingBuffer` storage.
///
/// # Safety
///
/// Implementors must lay out exactly `CAPACITY` values of `Item`
/// contiguously, starting at the address of `Self`.
pub unsafe trait Array {
    /// The array’s element type
    type Item;

    /// Number of elements the array can hold
    const CAPACITY: usize;
}

unsafe impl<T, const N: usize> Array for [T; N] {
    type Item = T;

    const CAPACITY: usize = N;
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::typenum::Unsigned;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<T, N> Array for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        const CAPACITY: usize = N::USIZE;
    }
}
