/// [Reflected binary Gray code][gray-code] of `n`.
///
/// ```text
/// n -> n ^ (n >> 1)
/// ```
///
/// [gray-code]: https://en.wikipedia.org/wiki/Gray_code
pub const fn gray(n: u32) -> u32 {
    n ^ (n >> 1)
}

/// Inverse of [`gray`]: the position of code `g` in the Gray sequence.
pub const fn gray_inverse(g: u32) -> u32 {
    let mut n = g;
    let mut shift = g >> 1;
    while shift != 0 {
        n ^= shift;
        shift >>= 1;
    }
    n
}

/// Number of bits in which `a` and `b` differ.
pub const fn hamming(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

/// Bit `j` of `i`, as a boolean.
pub const fn bit(i: u32, j: u32) -> bool {
    (i >> j) & 1 == 1
}
