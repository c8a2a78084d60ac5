use num_traits::PrimInt;

/// Exchange the bits at positions `first` and `second`
///
/// All other bits are left untouched. Positions at or beyond the bit width
/// of `T` return the value unchanged, which keeps the operation total and
/// self-inverse for every input.
pub fn swap_bits<T: PrimInt>(value: T, first: usize, second: usize) -> T {
    let width = T::zero().count_zeros() as usize;
    if first >= width || second >= width || first == second {
        return value;
    }

    let one = T::one();
    let first_set = (value >> first) & one;
    let second_set = (value >> second) & one;

    if first_set == second_set {
        value
    } else {
        value ^ ((one << first) | (one << second))
    }
}
