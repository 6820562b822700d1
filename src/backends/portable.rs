//! Plain-array lane type, available on every target.
//!
//! Written as straight-line loops over `[u32; 8]` so the optimizer can map it
//! onto whatever vector unit the target has.

use crate::{
    arx::Word,
    lanes::{LANES, Lanes, Wide},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Portable(pub(crate) [u32; LANES]);

impl Portable {
    #[inline(always)]
    fn zip_with(self, rhs: Self, f: impl Fn(u32, u32) -> u32) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    /// Builds each 128-bit half from `pick(half_a, half_b)`.
    #[inline(always)]
    fn per_half(self, rhs: Self, pick: impl Fn(&[u32; 4], &[u32; 4]) -> [u32; 4]) -> Self {
        let (a, _) = self.0.as_chunks::<4>();
        let (b, _) = rhs.0.as_chunks::<4>();
        let [l0, l1, l2, l3] = pick(&a[0], &b[0]);
        let [h0, h1, h2, h3] = pick(&a[1], &b[1]);
        Self([l0, l1, l2, l3, h0, h1, h2, h3])
    }
}

impl Word for Portable {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, u32::wrapping_add)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, u32::wrapping_sub)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a ^ b)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        Self(self.0.map(|w| w.rotate_right(n)))
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        Self(self.0.map(|w| w.rotate_left(n)))
    }
}

impl Lanes for Portable {
    #[inline(always)]
    fn splat(w: u32) -> Self {
        Self([w; LANES])
    }

    #[inline(always)]
    fn load_wide(cell: &Wide) -> Self {
        Self(cell.0)
    }

    #[inline(always)]
    fn load_le(bytes: &[u8; 32]) -> Self {
        let (words, _) = bytes.as_chunks::<4>();
        Self(core::array::from_fn(|i| u32::from_le_bytes(words[i])))
    }

    #[inline(always)]
    fn store_le(self, bytes: &mut [u8; 32]) {
        let (words, _) = bytes.as_chunks_mut::<4>();
        for (b, w) in words.iter_mut().zip(self.0) {
            *b = w.to_le_bytes();
        }
    }

    #[inline(always)]
    fn unpack_lo32(self, rhs: Self) -> Self {
        self.per_half(rhs, |a, b| [a[0], b[0], a[1], b[1]])
    }

    #[inline(always)]
    fn unpack_hi32(self, rhs: Self) -> Self {
        self.per_half(rhs, |a, b| [a[2], b[2], a[3], b[3]])
    }

    #[inline(always)]
    fn unpack_lo64(self, rhs: Self) -> Self {
        self.per_half(rhs, |a, b| [a[0], a[1], b[0], b[1]])
    }

    #[inline(always)]
    fn unpack_hi64(self, rhs: Self) -> Self {
        self.per_half(rhs, |a, b| [a[2], a[3], b[2], b[3]])
    }

    #[inline(always)]
    fn concat_lo128(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3, ..] = self.0;
        let [b0, b1, b2, b3, ..] = rhs.0;
        Self([a0, a1, a2, a3, b0, b1, b2, b3])
    }

    #[inline(always)]
    fn concat_hi128(self, rhs: Self) -> Self {
        let [.., a4, a5, a6, a7] = self.0;
        let [.., b4, b5, b6, b7] = rhs.0;
        Self([a4, a5, a6, a7, b4, b5, b6, b7])
    }
}
