//! Sponge key schedule.
//!
//! A 4x8 word state absorbs the master key through a 16-round ARX
//! permutation, then 24 subkeys are squeezed out of its left half. Each
//! squeeze step perturbs the state with a counter and a step-specific
//! domain-separation chunk before permuting again.

use core::{fmt, ops::Index};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    KEY_SIZE,
    arx::{self, SCHEDULE},
    consts::{C_INIT, KSC, KSS_WORDS, PERM_ROUNDS, RC_F, SQUEEZE_STEPS, SUBKEYS},
};

/// A 4x4 matrix of words, row-major.
pub type Matrix = [[u32; 4]; 4];

/// Words perturbed by the squeeze counter, one per row: `(row, column)`.
const COUNTER_TAPS: [(usize, usize); 4] = [(0, 7), (1, 3), (2, 6), (3, 1)];

/// The 24 subkeys expanded from one master key.
///
/// Subkeys 0 and 23 whiten the block before the first and after the last
/// round; subkeys 1..=22 are the round keys. The schedule is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Subkeys([Matrix; SUBKEYS]);

impl Subkeys {
    /// Expands a 256-bit master key (eight little-endian words).
    pub fn expand(master_key: &[u8; KEY_SIZE]) -> Self {
        let mut kss = ScheduleState::new(master_key);
        let mut subkeys = Self([[[0; 4]; 4]; SUBKEYS]);

        kss.permute();
        for (step, subkey) in subkeys.0.iter_mut().enumerate() {
            *subkey = kss.squeeze();
            if step < SQUEEZE_STEPS {
                kss.separate(step);
                kss.permute();
            }
        }
        subkeys
    }

    /// All subkeys in order.
    pub fn as_matrices(&self) -> &[Matrix; SUBKEYS] {
        &self.0
    }
}

impl Index<usize> for Subkeys {
    type Output = Matrix;

    #[inline(always)]
    fn index(&self, index: usize) -> &Matrix {
        &self.0[index]
    }
}

impl fmt::Debug for Subkeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subkeys { .. }")
    }
}

/// Expands `master_key` into its subkey schedule.
pub fn key_schedule(master_key: &[u8; KEY_SIZE]) -> Subkeys {
    Subkeys::expand(master_key)
}

/// The 1024-bit key-schedule state.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ScheduleState([[u32; 8]; 4]);

impl ScheduleState {
    fn new(master_key: &[u8; KEY_SIZE]) -> Self {
        let mut rows = [[0u32; 8]; 4];
        let (key_words, _) = master_key.as_chunks::<4>();
        for (word, bytes) in rows[0].iter_mut().zip(key_words) {
            *word = u32::from_le_bytes(*bytes);
        }
        for (row, init) in rows[1..].iter_mut().zip(C_INIT.chunks_exact(8)) {
            row.copy_from_slice(init);
        }
        Self(rows)
    }

    fn permute(&mut self) {
        for rc in RC_F.chunks_exact(4).take(PERM_ROUNDS) {
            self.round(rc);
        }
    }

    fn round(&mut self, rc: &[u32]) {
        let s = &mut self.0;

        for (i, c) in rc.iter().enumerate() {
            s[i][i] = s[i][i].wrapping_add(*c);
        }

        for j in 0..8 {
            let [a, b, c, d] = arx::mix(SCHEDULE, [s[0][j], s[1][j], s[2][j], s[3][j]]);
            s[0][j] = a;
            s[1][j] = b;
            s[2][j] = c;
            s[3][j] = d;
        }

        for (i, row) in s.iter_mut().enumerate() {
            mix_row_window(row, i);
            mix_row_window(row, i + 4);
        }
    }

    /// Copies the left 4x4 half out as one subkey.
    fn squeeze(&self) -> Matrix {
        let mut subkey = [[0; 4]; 4];
        for (out, row) in subkey.iter_mut().zip(&self.0) {
            out.copy_from_slice(&row[..4]);
        }
        subkey
    }

    /// Counter perturbation and domain separation for squeeze `step`.
    fn separate(&mut self, step: usize) {
        let counter = step as u32 + 1;
        for (row, col) in COUNTER_TAPS {
            self.0[row][col] = self.0[row][col].wrapping_add(counter);
        }

        let chunk = &KSC[step * KSS_WORDS..][..KSS_WORDS];
        for (word, k) in self.0.iter_mut().flatten().zip(chunk) {
            *word ^= k;
        }
    }
}

/// Mixes the four row words starting at `start`, wrapping around the row.
#[inline(always)]
fn mix_row_window(row: &mut [u32; 8], start: usize) {
    let idx = [start % 8, (start + 1) % 8, (start + 2) % 8, (start + 3) % 8];
    let mixed = arx::mix(SCHEDULE, idx.map(|k| row[k]));
    for (k, w) in idx.into_iter().zip(mixed) {
        row[k] = w;
    }
}
