//! Multi-block engine with a precomputed, erasable context.

use core::fmt;

use zeroize::Zeroize;

use crate::{
    BLOCK_SIZE,
    backends::{self, avx2_available},
    block::{decrypt_block_in_place, encrypt_block_in_place},
    error::{Error, Result},
    lanes::{Broadcast, Direction, LANES},
    schedule::Subkeys,
};

/// Lane engine used for whole groups of eight blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Backend {
    /// 256-bit AVX2 registers, x86 and x86_64 only.
    Avx2,
    /// Plain `[u32; 8]` lanes, every target.
    Portable,
}

impl Backend {
    const ALL: [Backend; 2] = [Backend::Avx2, Backend::Portable];

    /// Whether this backend can run on the current host.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Avx2 => avx2_available(),
            Backend::Portable => true,
        }
    }

    /// Short display name, as printed by `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Avx2 => "AVX2",
            Backend::Portable => "portable",
        }
    }

    // "AVX2" and "PORT" in ASCII.
    const fn tag(self) -> u32 {
        match self {
            Backend::Avx2 => 0x4156_5832,
            Backend::Portable => 0x504F_5254,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The backend [`Charybdis`](crate::Charybdis) dispatches to on this host.
pub fn active_backend() -> Backend {
    if avx2_available() {
        Backend::Avx2
    } else {
        Backend::Portable
    }
}

/// Key-dependent state for batch encryption and decryption.
///
/// Holds every subkey and round-constant word pre-broadcast to full register
/// width, plus the scalar schedule for blocks that do not fill a group of
/// eight. A context is read-only once built and can be shared across threads.
///
/// [`clear`](Self::clear) wipes all key material and invalidates the context.
/// It also runs on drop.
///
/// ```
/// use charybdis::{BatchContext, Backend, key_schedule};
///
/// let keys = key_schedule(&[1; 32]);
/// let ctx = BatchContext::with_backend(&keys, Backend::Portable)?;
///
/// let mut buf = [0x42u8; 64 * 10];
/// ctx.encrypt_in_place(&mut buf)?;
/// ctx.decrypt_in_place(&mut buf)?;
/// assert!(buf.iter().all(|&b| b == 0x42));
/// # Ok::<(), charybdis::Error>(())
/// ```
pub struct BatchContext {
    wide: Broadcast,
    scalar: Subkeys,
    tag: u32,
}

impl BatchContext {
    /// Builds a context for the AVX2 engine.
    ///
    /// Fails with [`Error::Unsupported`] when AVX2 is not usable; callers
    /// should then fall back to [`with_backend`](Self::with_backend) with
    /// [`Backend::Portable`] or to the single-block functions.
    pub fn new(subkeys: &Subkeys) -> Result<Self> {
        Self::with_backend(subkeys, Backend::Avx2)
    }

    /// Builds a context for `backend`, or fails with [`Error::Unsupported`]
    /// when that backend cannot run on this host.
    pub fn with_backend(subkeys: &Subkeys, backend: Backend) -> Result<Self> {
        if !backend.is_available() {
            return Err(Error::Unsupported(backend));
        }
        Ok(Self {
            wide: Broadcast::new(subkeys),
            scalar: subkeys.clone(),
            tag: Self::tag_for(backend),
        })
    }

    fn tag_for(backend: Backend) -> u32 {
        backend.tag() ^ size_of::<Self>() as u32
    }

    /// The backend this context was built for, or `None` once cleared.
    pub fn backend(&self) -> Option<Backend> {
        Backend::ALL.into_iter().find(|&b| self.tag == Self::tag_for(b))
    }

    /// Returns `true` after [`clear`](Self::clear): every byte of key
    /// material is zero and the context rejects further use.
    pub fn is_cleared(&self) -> bool {
        self.tag == 0
            && self.wide.is_zero()
            && self.scalar.as_matrices().iter().flatten().flatten().all(|&w| w == 0)
    }

    /// Encrypts `input` into `output`, block by block.
    pub fn encrypt(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.copy_and_process(Direction::Encrypt, input, output)
    }

    /// Decrypts `input` into `output`, block by block.
    pub fn decrypt(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.copy_and_process(Direction::Decrypt, input, output)
    }

    /// Encrypts every block of `buf` in place.
    pub fn encrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        let backend = self.check(buf.len())?;
        self.process(backend, Direction::Encrypt, buf);
        Ok(())
    }

    /// Decrypts every block of `buf` in place.
    pub fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        let backend = self.check(buf.len())?;
        self.process(backend, Direction::Decrypt, buf);
        Ok(())
    }

    /// Wipes the context. Safe to call repeatedly.
    pub fn clear(&mut self) {
        if let Some(backend) = self.backend() {
            backends::zeroize_registers(backend);
        }
        self.wide.zeroize();
        self.scalar.zeroize();
        self.tag.zeroize();
    }

    fn check(&self, len: usize) -> Result<Backend> {
        let backend = self.backend().ok_or(Error::InvalidContext)?;
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        if !len.is_multiple_of(BLOCK_SIZE) {
            return Err(Error::PartialBlock(len));
        }
        Ok(backend)
    }

    fn copy_and_process(&self, dir: Direction, input: &[u8], output: &mut [u8]) -> Result<()> {
        let backend = self.check(input.len())?;
        if output.len() != input.len() {
            return Err(Error::LengthMismatch {
                expected: input.len(),
                got: output.len(),
            });
        }
        output.copy_from_slice(input);
        self.process(backend, dir, output);
        Ok(())
    }

    fn process(&self, backend: Backend, dir: Direction, buf: &mut [u8]) {
        let (blocks, _) = buf.as_chunks_mut::<BLOCK_SIZE>();
        let (groups, tail) = blocks.as_chunks_mut::<LANES>();

        backends::process_groups(backend, &self.wide, dir, groups);

        for block in tail {
            match dir {
                Direction::Encrypt => encrypt_block_in_place(block, &self.scalar),
                Direction::Decrypt => decrypt_block_in_place(block, &self.scalar),
            }
        }
    }
}

impl Drop for BatchContext {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for BatchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchContext")
            .field("backend", &self.backend())
            .finish_non_exhaustive()
    }
}

/// Builds an AVX2 batch context; see [`BatchContext::new`].
pub fn batch_context_init(subkeys: &Subkeys) -> Result<BatchContext> {
    BatchContext::new(subkeys)
}

/// Encrypts every 64-byte block of `input` into `output`.
pub fn batch_encrypt(ctx: &BatchContext, input: &[u8], output: &mut [u8]) -> Result<()> {
    ctx.encrypt(input, output)
}

/// Decrypts every 64-byte block of `input` into `output`.
pub fn batch_decrypt(ctx: &BatchContext, input: &[u8], output: &mut [u8]) -> Result<()> {
    ctx.decrypt(input, output)
}

/// Wipes `ctx` if present. Idempotent.
pub fn batch_context_clear(ctx: Option<&mut BatchContext>) {
    if let Some(ctx) = ctx {
        ctx.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::encrypt_block;

    fn context() -> BatchContext {
        let keys = Subkeys::expand(&[0x3C; 32]);
        BatchContext::with_backend(&keys, Backend::Portable).unwrap()
    }

    #[test]
    fn tags_are_distinct_and_nonzero() {
        let a = BatchContext::tag_for(Backend::Avx2);
        let b = BatchContext::tag_for(Backend::Portable);
        assert_ne!(a, b);
        assert_ne!(a, 0);
        assert_ne!(b, 0);
    }

    #[test]
    fn backend_is_recovered_from_tag() {
        assert_eq!(context().backend(), Some(Backend::Portable));
    }

    #[test]
    fn validation_order() {
        let mut ctx = context();
        let mut out = [0u8; 64];
        assert_eq!(ctx.encrypt(&[], &mut out), Err(Error::EmptyInput));
        assert_eq!(ctx.encrypt(&[0; 65], &mut out), Err(Error::PartialBlock(65)));
        assert_eq!(
            ctx.encrypt(&[0; 128], &mut out),
            Err(Error::LengthMismatch { expected: 128, got: 64 })
        );
        ctx.clear();
        assert_eq!(ctx.encrypt(&[], &mut out), Err(Error::InvalidContext));
    }

    #[test]
    fn in_place_rejects_partial_blocks() {
        let ctx = context();
        let mut buf = [0u8; 64 * 2 + 1];
        assert_eq!(ctx.encrypt_in_place(&mut buf), Err(Error::PartialBlock(129)));
        assert_eq!(ctx.decrypt_in_place(&mut buf[..63]), Err(Error::PartialBlock(63)));
        assert!(ctx.encrypt_in_place(&mut buf[..128]).is_ok());
    }

    #[test]
    fn with_backend_requires_availability() {
        let keys = Subkeys::expand(&[0x3C; 32]);
        match BatchContext::with_backend(&keys, Backend::Avx2) {
            Ok(ctx) => {
                assert!(Backend::Avx2.is_available());
                assert_eq!(ctx.backend(), Some(Backend::Avx2));
            }
            Err(err) => {
                assert!(!Backend::Avx2.is_available());
                assert_eq!(err, Error::Unsupported(Backend::Avx2));
            }
        }
    }

    #[test]
    fn names_match_display() {
        for backend in Backend::ALL {
            assert_eq!(backend.to_string(), backend.name());
        }
        assert_eq!(Backend::Portable.name(), "portable");
    }

    #[test]
    fn tail_uses_scalar_engine() {
        let ctx = context();
        let keys = Subkeys::expand(&[0x3C; 32]);
        let mut buf = [0x11u8; 64 * 3];
        ctx.encrypt_in_place(&mut buf).unwrap();
        for block in buf.chunks_exact(64) {
            assert_eq!(block, encrypt_block(&[0x11; 64], &keys));
        }
    }

    #[test]
    fn clear_wipes_everything() {
        let mut ctx = context();
        assert!(!ctx.is_cleared());
        ctx.clear();
        assert!(ctx.is_cleared());
        assert_eq!(ctx.backend(), None);
        ctx.clear();
        assert!(ctx.is_cleared());
    }

    #[test]
    fn debug_hides_keys() {
        let ctx = context();
        assert_eq!(format!("{ctx:?}"), "BatchContext { backend: Some(Portable), .. }");
    }
}
