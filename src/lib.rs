//! Charybdis: a 512-bit block cipher with a 256-bit key.
//!
//! The block is a 4x4 matrix of little-endian 32-bit words. Each of the 22
//! rounds injects round constants, mixes every column with two ARX functions,
//! rotates the rows and adds a round key. A sponge key schedule expands the
//! master key into 24 subkeys, two of which whiten the input and output.
//!
//! Three ways in:
//!
//! - [`encrypt_block`] / [`decrypt_block`] for one block at a time with a
//!   [`Subkeys`] schedule from [`key_schedule`].
//! - [`BatchContext`] for many blocks: groups of eight run through an
//!   eight-lane engine (AVX2 when available), leftovers through the scalar
//!   engine. Output is identical to calling [`encrypt_block`] per block.
//! - [`Charybdis`], which implements the RustCrypto [`cipher`] traits.
//!
//! ```
//! use charybdis::{BatchContext, Backend, decrypt_block, encrypt_block, key_schedule};
//!
//! let keys = key_schedule(&[0x2a; 32]);
//!
//! let ct = encrypt_block(&[0u8; 64], &keys);
//! assert_eq!(decrypt_block(&ct, &keys), [0u8; 64]);
//!
//! let ctx = BatchContext::new(&keys)
//!     .or_else(|_| BatchContext::with_backend(&keys, Backend::Portable))?;
//! let mut out = [0u8; 64 * 9];
//! ctx.encrypt(&[0u8; 64 * 9], &mut out)?;
//! assert_eq!(&out[..64], &ct[..]);
//! # Ok::<(), charybdis::Error>(())
//! ```
//!
//! # Backend selection
//!
//! Detection happens at runtime. Two `--cfg` flags override it:
//! `charybdis_force_soft` never uses AVX2, and `charybdis_force_avx2`
//! assumes it (the build must also enable the `avx2` target feature).
//!
//! This crate makes no attempt at side-channel resistance and provides no
//! modes of operation.

#![cfg_attr(not(test), no_std)]

pub use cipher; // Re-export cipher crate for downstream users

mod arx;
pub(crate) mod backends;
mod batch;
mod block;
mod consts;
pub(crate) mod core;
mod error;
mod lanes;
mod schedule;

pub use crate::{
    backends::avx2_available,
    batch::{
        Backend, BatchContext, active_backend, batch_context_clear, batch_context_init,
        batch_decrypt, batch_encrypt,
    },
    block::{decrypt_block, decrypt_block_in_place, encrypt_block, encrypt_block_in_place},
    consts::{ROUNDS, SUBKEYS},
    core::Charybdis,
    error::{Error, Result},
    schedule::{Matrix, Subkeys, key_schedule},
};

/// Algorithm name.
pub const NAME: &str = "Charybdis";
/// Version of the algorithm definition implemented here.
pub const VERSION: &str = "1.0";
/// Block size in bytes.
pub const BLOCK_SIZE: usize = 64;
/// Key size in bytes.
pub const KEY_SIZE: usize = 32;
