#[inline(always)]
pub fn cycle_index(index: usize, size: usize, offset: isize) -> usize {
    ((index as isize + offset).rem_euclid(size as isize)) as usize
}

/// Integer division rounded half away from zero. `den` must be non-zero.
#[inline(always)]
pub fn round_div(num: i128, den: i128) -> i128 {
    debug_assert!(den != 0, "round_div: zero denominator");

    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let half = den / 2;

    if num >= 0 {
        (num + half) / den
    } else {
        -((-num + half) / den)
    }
}
