use cfg_if::cfg_if;
use cipher::{
    AlgorithmName, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser, Key,
    KeyInit, KeySizeUser,
    consts::{U32, U64},
};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    KEY_SIZE, NAME,
    backends::{self, Tokens},
    batch::{Backend, BatchContext},
    error::Result,
    lanes::Direction,
    schedule::Subkeys,
};

/// Charybdis with the RustCrypto [`cipher`] traits.
///
/// Picks the AVX2 backend at runtime when the host supports it and the soft
/// backend otherwise. Both process eight blocks per parallel call.
///
/// ```
/// use charybdis::Charybdis;
/// use charybdis::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};
///
/// let cipher = Charybdis::new(&GenericArray::from([0u8; 32]));
/// let mut block = GenericArray::clone_from_slice(&[0u8; 64]);
/// cipher.encrypt_block(&mut block);
/// assert_ne!(block.as_slice(), &[0u8; 64][..]);
/// cipher.decrypt_block(&mut block);
/// assert_eq!(block.as_slice(), &[0u8; 64][..]);
/// ```
#[derive(Clone)]
pub struct Charybdis {
    subkeys: Subkeys,
    /// CPU target feature tokens
    #[allow(dead_code)]
    tokens: Tokens,
}

impl Charybdis {
    /// Wraps an already expanded schedule.
    pub fn from_subkeys(subkeys: Subkeys) -> Self {
        Self {
            subkeys,
            tokens: backends::init_tokens(),
        }
    }

    /// The expanded schedule this instance encrypts with.
    pub fn subkeys(&self) -> &Subkeys {
        &self.subkeys
    }

    /// Builds a [`BatchContext`] for the backend this instance dispatches to.
    pub fn batch_context(&self) -> Result<BatchContext> {
        let backend = if backends::has_avx2(&self.tokens) {
            Backend::Avx2
        } else {
            Backend::Portable
        };
        BatchContext::with_backend(&self.subkeys, backend)
    }

    fn call_with_backend(&self, dir: Direction, f: impl BlockClosure<BlockSize = U64>) {
        cfg_if! {
            if #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(charybdis_force_soft)))] {
                if backends::has_avx2(&self.tokens) {
                    // SAFETY: the token confirms AVX2 support.
                    let mut backend = unsafe { backends::avx2::Backend::new(&self.subkeys, dir) };
                    f.call(&mut backend);
                    return;
                }
            }
        }
        f.call(&mut backends::soft::Backend::new(&self.subkeys, dir));
    }
}

impl KeySizeUser for Charybdis {
    type KeySize = U32;
}

impl BlockSizeUser for Charybdis {
    type BlockSize = U64;
}

impl BlockCipher for Charybdis {}

impl KeyInit for Charybdis {
    fn new(key: &Key<Self>) -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(key);
        let subkeys = Subkeys::expand(&bytes);
        bytes.zeroize();
        Self::from_subkeys(subkeys)
    }
}

impl BlockEncrypt for Charybdis {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        self.call_with_backend(Direction::Encrypt, f);
    }
}

impl BlockDecrypt for Charybdis {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        self.call_with_backend(Direction::Decrypt, f);
    }
}

impl AlgorithmName for Charybdis {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NAME)
    }
}

impl fmt::Debug for Charybdis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Charybdis { .. }")
    }
}

// `Subkeys` wipes itself on drop.
impl ZeroizeOnDrop for Charybdis {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::key_schedule;

    #[test]
    fn new_expands_the_key() {
        let cipher = Charybdis::new(&Key::<Charybdis>::clone_from_slice(&[9; KEY_SIZE]));
        assert_eq!(cipher.subkeys().as_matrices(), key_schedule(&[9; KEY_SIZE]).as_matrices());
    }

    #[test]
    fn batch_context_follows_dispatch() {
        let cipher = Charybdis::from_subkeys(key_schedule(&[3; KEY_SIZE]));
        let ctx = cipher.batch_context().unwrap();
        assert_eq!(ctx.backend(), Some(crate::active_backend()));
    }
}
