//! Scalar round engine: one block at a time.

use crate::{
    BLOCK_SIZE,
    arx::{self, PRIMARY, Rotations, SECONDARY},
    consts::{RC, ROUNDS, STATE_WORDS, SUBKEYS},
    schedule::{Matrix, Subkeys},
};

/// Role assignment for the second half of the column mix: `(c, d, a, b)`.
pub(crate) const SWAPPED: [usize; 4] = [2, 3, 0, 1];
/// Identity role assignment.
pub(crate) const DIRECT: [usize; 4] = [0, 1, 2, 3];

/// The four mixes of one column mix, in application order.
pub(crate) const COLUMN_MIX: [(Rotations, [usize; 4]); 4] = [
    (PRIMARY, DIRECT),
    (SECONDARY, DIRECT),
    (SECONDARY, SWAPPED),
    (PRIMARY, SWAPPED),
];

#[inline(always)]
pub(crate) fn load(bytes: &[u8; BLOCK_SIZE]) -> Matrix {
    let (words, _) = bytes.as_chunks::<4>();
    let mut state = [[0; 4]; 4];
    for (w, b) in state.iter_mut().flatten().zip(words) {
        *w = u32::from_le_bytes(*b);
    }
    state
}

#[inline(always)]
pub(crate) fn store(state: &Matrix, bytes: &mut [u8; BLOCK_SIZE]) {
    let (words, _) = bytes.as_chunks_mut::<4>();
    for (b, w) in words.iter_mut().zip(state.iter().flatten()) {
        *b = w.to_le_bytes();
    }
}

#[inline(always)]
fn column_mix(state: &mut Matrix, col: usize) {
    for (rot, roles) in COLUMN_MIX {
        let mixed = arx::mix(rot, roles.map(|r| state[r][col]));
        for (r, w) in roles.into_iter().zip(mixed) {
            state[r][col] = w;
        }
    }
}

#[inline(always)]
fn inverse_column_mix(state: &mut Matrix, col: usize) {
    for (rot, roles) in COLUMN_MIX.into_iter().rev() {
        let unmixed = arx::unmix(rot, roles.map(|r| state[r][col]));
        for (r, w) in roles.into_iter().zip(unmixed) {
            state[r][col] = w;
        }
    }
}

/// Row `i` rotates left by `i` columns.
#[inline(always)]
pub(crate) fn shift_rows<T>(rows: &mut [[T; 4]; 4]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.rotate_left(i);
    }
}

#[inline(always)]
pub(crate) fn inverse_shift_rows<T>(rows: &mut [[T; 4]; 4]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.rotate_right(i);
    }
}

/// Round constants for round `round` (1-based), as a 4x4 slice view.
#[inline(always)]
pub(crate) fn round_constants(round: usize) -> &'static [u32] {
    &RC[(round - 1) * STATE_WORDS..][..STATE_WORDS]
}

/// XORs in the constants of `round`. Self-inverse.
#[inline(always)]
fn sub_constants(state: &mut Matrix, round: usize) {
    for (w, c) in state.iter_mut().flatten().zip(round_constants(round)) {
        *w ^= c;
    }
}

/// XORs in a subkey. Self-inverse.
#[inline(always)]
fn add_round_key(state: &mut Matrix, key: &Matrix) {
    for (w, k) in state.iter_mut().flatten().zip(key.iter().flatten()) {
        *w ^= k;
    }
}

#[inline(always)]
fn round(state: &mut Matrix, keys: &Subkeys, r: usize) {
    sub_constants(state, r);
    for col in 0..4 {
        column_mix(state, col);
    }
    shift_rows(state);
    add_round_key(state, &keys[r]);
}

#[inline(always)]
fn inverse_round(state: &mut Matrix, keys: &Subkeys, r: usize) {
    add_round_key(state, &keys[r]);
    inverse_shift_rows(state);
    for col in 0..4 {
        inverse_column_mix(state, col);
    }
    sub_constants(state, r);
}

pub(crate) fn encrypt_state(state: &mut Matrix, keys: &Subkeys) {
    add_round_key(state, &keys[0]);
    for r in 1..=ROUNDS {
        round(state, keys, r);
    }
    add_round_key(state, &keys[SUBKEYS - 1]);
}

pub(crate) fn decrypt_state(state: &mut Matrix, keys: &Subkeys) {
    add_round_key(state, &keys[SUBKEYS - 1]);
    for r in (1..=ROUNDS).rev() {
        inverse_round(state, keys, r);
    }
    add_round_key(state, &keys[0]);
}

/// Encrypts one 64-byte block in place.
pub fn encrypt_block_in_place(block: &mut [u8; BLOCK_SIZE], keys: &Subkeys) {
    let mut state = load(block);
    encrypt_state(&mut state, keys);
    store(&state, block);
}

/// Decrypts one 64-byte block in place.
pub fn decrypt_block_in_place(block: &mut [u8; BLOCK_SIZE], keys: &Subkeys) {
    let mut state = load(block);
    decrypt_state(&mut state, keys);
    store(&state, block);
}

/// Encrypts one 64-byte block.
///
/// ```
/// use charybdis::{decrypt_block, encrypt_block, key_schedule};
///
/// let keys = key_schedule(&[7; 32]);
/// let ct = encrypt_block(&[0x5a; 64], &keys);
/// assert_eq!(decrypt_block(&ct, &keys), [0x5a; 64]);
/// ```
pub fn encrypt_block(block: &[u8; BLOCK_SIZE], keys: &Subkeys) -> [u8; BLOCK_SIZE] {
    let mut out = *block;
    encrypt_block_in_place(&mut out, keys);
    out
}

/// Decrypts one 64-byte block.
pub fn decrypt_block(block: &[u8; BLOCK_SIZE], keys: &Subkeys) -> [u8; BLOCK_SIZE] {
    let mut out = *block;
    decrypt_block_in_place(&mut out, keys);
    out
}
