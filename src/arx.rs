//! ARX (add-rotate-xor) mixing primitives.
//!
//! The mixes are written once over [`Word`], so the scalar engine, the lane
//! engines and the key schedule all run the exact same sequence of operations.

/// A 32-bit word, or a vector of independent 32-bit lanes.
pub(crate) trait Word: Copy {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn rotr(self, n: u32) -> Self;
    fn rotl(self, n: u32) -> Self;
}

impl Word for u32 {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        self.rotate_left(n)
    }
}

/// Rotation amounts of the four stages of one mixing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rotations(pub(crate) [u32; 4]);

/// Primary block mix (`G`).
pub(crate) const PRIMARY: Rotations = Rotations([13, 19, 23, 29]);
/// Secondary block mix (`H`).
pub(crate) const SECONDARY: Rotations = Rotations([9, 17, 21, 27]);
/// Mix used by the key-schedule permutation.
pub(crate) const SCHEDULE: Rotations = Rotations([11, 19, 23, 29]);

/// Stages 1 and 3: `a += b; d ^= a; d >>>= n`. Returns the new `(a, d)`.
#[inline(always)]
pub(crate) fn stage_ad<W: Word>(a: W, b: W, d: W, n: u32) -> (W, W) {
    let a = a.add(b);
    (a, d.xor(a).rotr(n))
}

/// Stages 2 and 4: `c += d; b ^= c; b >>>= n`. Returns the new `(c, b)`.
#[inline(always)]
pub(crate) fn stage_cb<W: Word>(c: W, b: W, d: W, n: u32) -> (W, W) {
    let c = c.add(d);
    (c, b.xor(c).rotr(n))
}

/// Inverse of [`stage_ad`]. Returns the original `(a, d)`.
#[inline(always)]
pub(crate) fn unstage_ad<W: Word>(a: W, b: W, d: W, n: u32) -> (W, W) {
    let d = d.rotl(n).xor(a);
    (a.sub(b), d)
}

/// Inverse of [`stage_cb`]. Returns the original `(c, b)`.
#[inline(always)]
pub(crate) fn unstage_cb<W: Word>(c: W, b: W, d: W, n: u32) -> (W, W) {
    let b = b.rotl(n).xor(c);
    (c.sub(d), b)
}

/// Applies the four-stage mix to `[a, b, c, d]`.
#[inline(always)]
pub(crate) fn mix<W: Word>(rot: Rotations, [mut a, mut b, mut c, mut d]: [W; 4]) -> [W; 4] {
    let [r1, r2, r3, r4] = rot.0;
    (a, d) = stage_ad(a, b, d, r1);
    (c, b) = stage_cb(c, b, d, r2);
    (a, d) = stage_ad(a, b, d, r3);
    (c, b) = stage_cb(c, b, d, r4);
    [a, b, c, d]
}

/// Exact inverse of [`mix`] with the same rotation set.
#[inline(always)]
pub(crate) fn unmix<W: Word>(rot: Rotations, [mut a, mut b, mut c, mut d]: [W; 4]) -> [W; 4] {
    let [r1, r2, r3, r4] = rot.0;
    (c, b) = unstage_cb(c, b, d, r4);
    (a, d) = unstage_ad(a, b, d, r3);
    (c, b) = unstage_cb(c, b, d, r2);
    (a, d) = unstage_ad(a, b, d, r1);
    [a, b, c, d]
}
