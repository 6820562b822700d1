//! Eight-lane round engine.
//!
//! Eight blocks are transposed into structure-of-arrays form so that lane `b`
//! of register `(row, col)` holds word `(row, col)` of block `b`. The round
//! function is then the scalar one, applied once per register.
//!
//! Everything here is generic over [`Lanes`]; the backends only supply the
//! register type.

use zeroize::Zeroize;

use crate::{
    BLOCK_SIZE,
    arx::{self, Rotations, Word},
    block::{COLUMN_MIX, inverse_shift_rows, round_constants, shift_rows},
    consts::{ROUNDS, SUBKEYS},
    schedule::Subkeys,
};

/// Blocks processed per group.
pub(crate) const LANES: usize = 8;

/// Eight blocks laid out contiguously.
pub(crate) type Group = [[u8; BLOCK_SIZE]; LANES];

/// One word broadcast to every lane, aligned for a single aligned load.
#[repr(C, align(32))]
#[derive(Clone, Copy, Zeroize)]
pub(crate) struct Wide(pub(crate) [u32; LANES]);

impl Wide {
    const fn splat(w: u32) -> Self {
        Self([w; LANES])
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }
}

/// A register of eight independent 32-bit lanes.
///
/// The interleave primitives follow x86 AVX2 semantics: the 32- and 64-bit
/// unpacks operate within each 128-bit half independently.
pub(crate) trait Lanes: Word {
    fn splat(w: u32) -> Self;
    fn load_wide(cell: &Wide) -> Self;
    fn load_le(bytes: &[u8; 32]) -> Self;
    fn store_le(self, bytes: &mut [u8; 32]);

    /// `[a0 b0 a1 b1 | a4 b4 a5 b5]`
    fn unpack_lo32(self, rhs: Self) -> Self;
    /// `[a2 b2 a3 b3 | a6 b6 a7 b7]`
    fn unpack_hi32(self, rhs: Self) -> Self;
    /// `[a0 a1 b0 b1 | a4 a5 b4 b5]`
    fn unpack_lo64(self, rhs: Self) -> Self;
    /// `[a2 a3 b2 b3 | a6 a7 b6 b7]`
    fn unpack_hi64(self, rhs: Self) -> Self;
    /// `[a0 a1 a2 a3 | b0 b1 b2 b3]`
    fn concat_lo128(self, rhs: Self) -> Self;
    /// `[a4 a5 a6 a7 | b4 b5 b6 b7]`
    fn concat_hi128(self, rhs: Self) -> Self;
}

/// Transposes an 8x8 matrix of 32-bit words held in eight registers.
///
/// Three interleave levels: 32-bit lanes, 64-bit pairs, 128-bit halves.
/// The transpose is its own inverse.
#[inline(always)]
pub(crate) fn transpose8<L: Lanes>(r: [L; 8]) -> [L; 8] {
    let t0 = r[0].unpack_lo32(r[1]);
    let t1 = r[0].unpack_hi32(r[1]);
    let t2 = r[2].unpack_lo32(r[3]);
    let t3 = r[2].unpack_hi32(r[3]);
    let t4 = r[4].unpack_lo32(r[5]);
    let t5 = r[4].unpack_hi32(r[5]);
    let t6 = r[6].unpack_lo32(r[7]);
    let t7 = r[6].unpack_hi32(r[7]);

    let u0 = t0.unpack_lo64(t2);
    let u1 = t0.unpack_hi64(t2);
    let u2 = t1.unpack_lo64(t3);
    let u3 = t1.unpack_hi64(t3);
    let u4 = t4.unpack_lo64(t6);
    let u5 = t4.unpack_hi64(t6);
    let u6 = t5.unpack_lo64(t7);
    let u7 = t5.unpack_hi64(t7);

    [
        u0.concat_lo128(u4),
        u1.concat_lo128(u5),
        u2.concat_lo128(u6),
        u3.concat_lo128(u7),
        u0.concat_hi128(u4),
        u1.concat_hi128(u5),
        u2.concat_hi128(u6),
        u3.concat_hi128(u7),
    ]
}

/// Loads eight blocks into transposed register state.
#[inline(always)]
pub(crate) fn load_group<L: Lanes>(group: &Group) -> [[L; 4]; 4] {
    let mut lo = [L::splat(0); 8];
    let mut hi = [L::splat(0); 8];
    for ((l, h), block) in lo.iter_mut().zip(hi.iter_mut()).zip(group) {
        let (halves, _) = block.as_chunks::<32>();
        *l = L::load_le(&halves[0]);
        *h = L::load_le(&halves[1]);
    }
    let [w0, w1, w2, w3, w4, w5, w6, w7] = transpose8(lo);
    let [w8, w9, w10, w11, w12, w13, w14, w15] = transpose8(hi);
    [
        [w0, w1, w2, w3],
        [w4, w5, w6, w7],
        [w8, w9, w10, w11],
        [w12, w13, w14, w15],
    ]
}

/// Inverse of [`load_group`].
#[inline(always)]
pub(crate) fn store_group<L: Lanes>(state: [[L; 4]; 4], group: &mut Group) {
    let [[w0, w1, w2, w3], [w4, w5, w6, w7], [w8, w9, w10, w11], [w12, w13, w14, w15]] = state;
    let lo = transpose8([w0, w1, w2, w3, w4, w5, w6, w7]);
    let hi = transpose8([w8, w9, w10, w11, w12, w13, w14, w15]);
    for ((l, h), block) in lo.into_iter().zip(hi).zip(group) {
        let (halves, _) = block.as_chunks_mut::<32>();
        l.store_le(&mut halves[0]);
        h.store_le(&mut halves[1]);
    }
}

/// Source of per-round key and constant registers.
pub(crate) trait RoundKeys<L: Lanes> {
    /// Word `(row, col)` of subkey `idx` in every lane.
    fn subkey_word(&self, idx: usize, row: usize, col: usize) -> L;
    /// Word `(row, col)` of the constants of `round` (1-based) in every lane.
    fn constant_word(&self, round: usize, row: usize, col: usize) -> L;
}

impl<L: Lanes> RoundKeys<L> for Subkeys {
    #[inline(always)]
    fn subkey_word(&self, idx: usize, row: usize, col: usize) -> L {
        L::splat(self[idx][row][col])
    }

    #[inline(always)]
    fn constant_word(&self, round: usize, row: usize, col: usize) -> L {
        L::splat(round_constants(round)[4 * row + col])
    }
}

/// Subkeys and round constants pre-broadcast to full register width.
#[derive(Clone, Zeroize)]
pub(crate) struct Broadcast {
    subkeys: [[[Wide; 4]; 4]; SUBKEYS],
    constants: [[[Wide; 4]; 4]; ROUNDS],
}

impl Broadcast {
    pub(crate) fn new(keys: &Subkeys) -> Self {
        Self {
            subkeys: core::array::from_fn(|k| {
                core::array::from_fn(|i| core::array::from_fn(|j| Wide::splat(keys[k][i][j])))
            }),
            constants: core::array::from_fn(|r| {
                let rc = round_constants(r + 1);
                core::array::from_fn(|i| core::array::from_fn(|j| Wide::splat(rc[4 * i + j])))
            }),
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.subkeys
            .iter()
            .chain(&self.constants)
            .flatten()
            .flatten()
            .all(Wide::is_zero)
    }
}

impl<L: Lanes> RoundKeys<L> for Broadcast {
    #[inline(always)]
    fn subkey_word(&self, idx: usize, row: usize, col: usize) -> L {
        L::load_wide(&self.subkeys[idx][row][col])
    }

    #[inline(always)]
    fn constant_word(&self, round: usize, row: usize, col: usize) -> L {
        L::load_wide(&self.constants[round - 1][row][col])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

/// Applies `f` to `(a, b, c, d)` of every column, where `roles` maps the
/// four roles to state rows.
#[inline(always)]
fn for_each_column<L: Lanes>(
    s: &mut [[L; 4]; 4],
    roles: [usize; 4],
    mut f: impl FnMut(&mut L, &mut L, &mut L, &mut L),
) {
    let [mut a, mut b, mut c, mut d] = roles.map(|r| s[r]);
    for (((wa, wb), wc), wd) in a.iter_mut().zip(&mut b).zip(&mut c).zip(&mut d) {
        f(wa, wb, wc, wd);
    }
    for (r, row) in roles.into_iter().zip([a, b, c, d]) {
        s[r] = row;
    }
}

/// One mix across all four columns, stage by stage.
#[inline(always)]
fn mix_columns<L: Lanes>(s: &mut [[L; 4]; 4], rot: Rotations, roles: [usize; 4]) {
    for (stage, n) in rot.0.into_iter().enumerate() {
        if stage % 2 == 0 {
            for_each_column(s, roles, |a, b, _, d| {
                (*a, *d) = arx::stage_ad(*a, *b, *d, n);
            });
        } else {
            for_each_column(s, roles, |_, b, c, d| {
                (*c, *b) = arx::stage_cb(*c, *b, *d, n);
            });
        }
    }
}

#[inline(always)]
fn unmix_columns<L: Lanes>(s: &mut [[L; 4]; 4], rot: Rotations, roles: [usize; 4]) {
    for (stage, n) in rot.0.into_iter().enumerate().rev() {
        if stage % 2 == 0 {
            for_each_column(s, roles, |a, b, _, d| {
                (*a, *d) = arx::unstage_ad(*a, *b, *d, n);
            });
        } else {
            for_each_column(s, roles, |_, b, c, d| {
                (*c, *b) = arx::unstage_cb(*c, *b, *d, n);
            });
        }
    }
}

#[inline(always)]
fn xor_subkey<L: Lanes, K: RoundKeys<L>>(s: &mut [[L; 4]; 4], keys: &K, idx: usize) {
    for (i, row) in s.iter_mut().enumerate() {
        for (j, w) in row.iter_mut().enumerate() {
            *w = w.xor(keys.subkey_word(idx, i, j));
        }
    }
}

#[inline(always)]
fn xor_constants<L: Lanes, K: RoundKeys<L>>(s: &mut [[L; 4]; 4], keys: &K, round: usize) {
    for (i, row) in s.iter_mut().enumerate() {
        for (j, w) in row.iter_mut().enumerate() {
            *w = w.xor(keys.constant_word(round, i, j));
        }
    }
}

#[inline(always)]
fn encrypt_lanes<L: Lanes, K: RoundKeys<L>>(s: &mut [[L; 4]; 4], keys: &K) {
    xor_subkey(s, keys, 0);
    for r in 1..=ROUNDS {
        xor_constants(s, keys, r);
        for (rot, roles) in COLUMN_MIX {
            mix_columns(s, rot, roles);
        }
        shift_rows(s);
        xor_subkey(s, keys, r);
    }
    xor_subkey(s, keys, SUBKEYS - 1);
}

#[inline(always)]
fn decrypt_lanes<L: Lanes, K: RoundKeys<L>>(s: &mut [[L; 4]; 4], keys: &K) {
    xor_subkey(s, keys, SUBKEYS - 1);
    for r in (1..=ROUNDS).rev() {
        xor_subkey(s, keys, r);
        inverse_shift_rows(s);
        for (rot, roles) in COLUMN_MIX.into_iter().rev() {
            unmix_columns(s, rot, roles);
        }
        xor_constants(s, keys, r);
    }
    xor_subkey(s, keys, 0);
}

/// Encrypts or decrypts eight blocks in place.
#[inline(always)]
pub(crate) fn process_group<L: Lanes, K: RoundKeys<L>>(
    keys: &K,
    dir: Direction,
    group: &mut Group,
) {
    let mut state = load_group::<L>(group);
    match dir {
        Direction::Encrypt => encrypt_lanes(&mut state, keys),
        Direction::Decrypt => decrypt_lanes(&mut state, keys),
    }
    store_group(state, group);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{backends::portable::Portable, block};

    fn keys() -> Subkeys {
        Subkeys::expand(&core::array::from_fn(|i| (i as u8).wrapping_mul(29)))
    }

    fn group() -> Group {
        core::array::from_fn(|b| core::array::from_fn(|i| (b * 64 + i) as u8 ^ 0xA5))
    }

    #[test]
    fn transpose_moves_word_k_of_row_b_to_lane_b_of_register_k() {
        let rows: [Portable; 8] =
            core::array::from_fn(|b| Portable(core::array::from_fn(|k| (10 * b + k) as u32)));
        let cols = transpose8(rows);
        for (k, col) in cols.iter().enumerate() {
            for (b, w) in col.0.iter().enumerate() {
                assert_eq!(*w, (10 * b + k) as u32);
            }
        }
        assert_eq!(transpose8(cols), rows);
    }

    #[test]
    fn load_group_places_words_by_block() {
        let g = group();
        let state = load_group::<Portable>(&g);
        for (b, blk) in g.iter().enumerate() {
            let scalar = block::load(blk);
            for i in 0..4 {
                for j in 0..4 {
                    assert_eq!(state[i][j].0[b], scalar[i][j]);
                }
            }
        }
        let mut back = [[0; BLOCK_SIZE]; LANES];
        store_group(state, &mut back);
        assert_eq!(back, g);
    }

    #[test]
    fn lanes_match_scalar_engine() {
        let keys = keys();
        let mut g = group();
        process_group::<Portable, _>(&keys, Direction::Encrypt, &mut g);
        for (b, ct) in g.iter().enumerate() {
            assert_eq!(*ct, block::encrypt_block(&group()[b], &keys));
        }
        process_group::<Portable, _>(&keys, Direction::Decrypt, &mut g);
        assert_eq!(g, group());
    }

    #[test]
    fn broadcast_tables_match_splat() {
        let keys = keys();
        let wide = Broadcast::new(&keys);
        let mut a = group();
        let mut b = group();
        process_group::<Portable, _>(&keys, Direction::Encrypt, &mut a);
        process_group::<Portable, _>(&wide, Direction::Encrypt, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn broadcast_zeroize() {
        let mut wide = Broadcast::new(&keys());
        assert!(!wide.is_zero());
        wide.zeroize();
        assert!(wide.is_zero());
    }
}
