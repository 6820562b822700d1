//! AVX2 lane type: one `__m256i` per state word.
//!
//! Every method is `#[inline(always)]` and only ever reached from the
//! `avx2`-enabled entry points at the bottom of this file.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use cipher::{
    BlockBackend, BlockSizeUser, ParBlocks, ParBlocksSizeUser,
    consts::{U8, U64},
    inout::InOut,
};
use zeroize::Zeroize;

use super::{CipherBlock, crypt_block, gather, scatter};
use crate::{
    arx::Word,
    lanes::{self, Direction, Group, Lanes, RoundKeys, Wide},
    schedule::Subkeys,
};

#[derive(Clone, Copy)]
pub(crate) struct Avx2(__m256i);

// SAFETY (all unsafe blocks below): `Avx2` values are only created and used
// inside `process_groups`, which requires AVX2.
impl Word for Avx2 {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        unsafe {
            let right = _mm_cvtsi32_si128(n as i32);
            let left = _mm_cvtsi32_si128((32 - n) as i32);
            Self(_mm256_or_si256(
                _mm256_srl_epi32(self.0, right),
                _mm256_sll_epi32(self.0, left),
            ))
        }
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        self.rotr(32 - n)
    }
}

impl Lanes for Avx2 {
    #[inline(always)]
    fn splat(w: u32) -> Self {
        Self(unsafe { _mm256_set1_epi32(w as i32) })
    }

    #[inline(always)]
    fn load_wide(cell: &Wide) -> Self {
        // `Wide` is 32-byte aligned.
        Self(unsafe { _mm256_load_si256(cell.0.as_ptr().cast()) })
    }

    // x86 is little-endian, so raw loads and stores already use LE words.
    #[inline(always)]
    fn load_le(bytes: &[u8; 32]) -> Self {
        Self(unsafe { _mm256_loadu_si256(bytes.as_ptr().cast()) })
    }

    #[inline(always)]
    fn store_le(self, bytes: &mut [u8; 32]) {
        unsafe { _mm256_storeu_si256(bytes.as_mut_ptr().cast(), self.0) }
    }

    #[inline(always)]
    fn unpack_lo32(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_unpacklo_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn unpack_hi32(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_unpackhi_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn unpack_lo64(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_unpacklo_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn unpack_hi64(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_unpackhi_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn concat_lo128(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_permute2x128_si256::<0x20>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn concat_hi128(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_permute2x128_si256::<0x31>(self.0, rhs.0) })
    }
}

/// Runs every group through the eight-lane engine.
///
/// # Safety
/// The CPU must support AVX2 and the OS must preserve YMM state.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn process_groups<K: RoundKeys<Avx2>>(
    keys: &K,
    dir: Direction,
    groups: &mut [Group],
) {
    for group in groups {
        lanes::process_group::<Avx2, K>(keys, dir, group);
    }
}

/// Clears all YMM registers.
///
/// # Safety
/// The CPU must support AVX.
#[target_feature(enable = "avx")]
pub(crate) unsafe fn zeroize_registers() {
    _mm256_zeroall();
}

/// `cipher` backend running eight blocks per call on AVX2.
pub(crate) struct Backend<'a> {
    keys: &'a Subkeys,
    dir: Direction,
}

impl<'a> Backend<'a> {
    /// # Safety
    /// AVX2 must be available, see [`process_groups`].
    pub(crate) unsafe fn new(keys: &'a Subkeys, dir: Direction) -> Self {
        Self { keys, dir }
    }
}

impl BlockSizeUser for Backend<'_> {
    type BlockSize = U64;
}

impl ParBlocksSizeUser for Backend<'_> {
    type ParBlocksSize = U8;
}

impl BlockBackend for Backend<'_> {
    #[inline]
    fn proc_block(&mut self, block: InOut<'_, '_, CipherBlock>) {
        crypt_block(self.keys, self.dir, block);
    }

    #[inline]
    fn proc_par_blocks(&mut self, mut blocks: InOut<'_, '_, ParBlocks<Self>>) {
        let mut group = gather(blocks.get_in());
        // SAFETY: `Backend::new` requires AVX2.
        unsafe { process_groups(self.keys, self.dir, core::slice::from_mut(&mut group)) };
        scatter(&group, blocks.get_out());
        group.zeroize();
    }
}
