use cfg_if::cfg_if;
use cipher::{consts::U64, generic_array::GenericArray, inout::InOut};
use zeroize::Zeroize;

use crate::{
    BLOCK_SIZE,
    batch::Backend as Engine,
    block::{decrypt_block_in_place, encrypt_block_in_place},
    lanes::{self, Broadcast, Direction, Group, LANES},
    schedule::Subkeys,
};

pub(crate) mod portable;
pub(crate) mod soft;

cfg_if! {
    if #[cfg(charybdis_force_soft)] {
        pub(crate) type Tokens = ();

        pub(crate) fn init_tokens() -> Tokens {}

        pub(crate) fn has_avx2(_: &Tokens) -> bool {
            false
        }
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub(crate) mod avx2;

        cfg_if! {
            if #[cfg(charybdis_force_avx2)] {
                #[cfg(not(target_feature = "avx2"))]
                compile_error!("You must enable `avx2` target feature with \
                    `charybdis_force_avx2` configuration option");

                pub(crate) type Tokens = ();

                pub(crate) fn init_tokens() -> Tokens {}

                pub(crate) fn has_avx2(_: &Tokens) -> bool {
                    true
                }
            } else {
                // Checks CPUID and that the OS saves YMM state (XCR0);
                // the result is cached after the first call.
                cpufeatures::new!(avx2_cpuid, "avx2");

                pub(crate) type Tokens = avx2_cpuid::InitToken;

                pub(crate) fn init_tokens() -> Tokens {
                    avx2_cpuid::init()
                }

                pub(crate) fn has_avx2(tokens: &Tokens) -> bool {
                    tokens.get()
                }
            }
        }
    } else {
        pub(crate) type Tokens = ();

        pub(crate) fn init_tokens() -> Tokens {}

        pub(crate) fn has_avx2(_: &Tokens) -> bool {
            false
        }
    }
}

/// Returns `true` if the AVX2 engine can run on this host.
///
/// The CPU check runs once per process; later calls read the cached answer.
pub fn avx2_available() -> bool {
    has_avx2(&init_tokens())
}

/// Runs whole groups through the lane engine selected by `engine`.
///
/// Callers must only pass [`Engine::Avx2`] after checking availability.
pub(crate) fn process_groups(
    engine: Engine,
    keys: &Broadcast,
    dir: Direction,
    groups: &mut [Group],
) {
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(charybdis_force_soft)))]
    {
        if engine == Engine::Avx2 {
            // SAFETY: contexts are only built for `Avx2` once `avx2_available()` holds.
            unsafe { avx2::process_groups(keys, dir, groups) };
            return;
        }
    }
    #[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), not(charybdis_force_soft))))]
    let _ = engine;

    for group in groups {
        lanes::process_group::<portable::Portable, _>(keys, dir, group);
    }
}

/// Clears the vector register file if `engine` may have left key material in it.
pub(crate) fn zeroize_registers(engine: Engine) {
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(charybdis_force_soft)))]
    {
        if engine == Engine::Avx2 {
            // SAFETY: AVX2 implies AVX, and `Avx2` contexts only exist when it is available.
            unsafe { avx2::zeroize_registers() };
        }
    }
    #[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), not(charybdis_force_soft))))]
    let _ = engine;
}

pub(crate) type CipherBlock = GenericArray<u8, U64>;

/// One block through the scalar engine, for the `cipher` backends.
pub(crate) fn crypt_block(
    keys: &Subkeys,
    dir: Direction,
    mut block: InOut<'_, '_, CipherBlock>,
) {
    let mut bytes = [0u8; BLOCK_SIZE];
    bytes.copy_from_slice(block.get_in());
    match dir {
        Direction::Encrypt => encrypt_block_in_place(&mut bytes, keys),
        Direction::Decrypt => decrypt_block_in_place(&mut bytes, keys),
    }
    block.get_out().copy_from_slice(&bytes);
    bytes.zeroize();
}

pub(crate) fn gather(blocks: &[CipherBlock]) -> Group {
    let mut group = [[0u8; BLOCK_SIZE]; LANES];
    for (dst, src) in group.iter_mut().zip(blocks) {
        dst.copy_from_slice(src);
    }
    group
}

pub(crate) fn scatter(group: &Group, blocks: &mut [CipherBlock]) {
    for (dst, src) in blocks.iter_mut().zip(group) {
        dst.copy_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{decrypt_block, encrypt_block};

    fn pattern() -> [u8; BLOCK_SIZE] {
        core::array::from_fn(|i| (i * 7) as u8)
    }

    #[test]
    fn crypt_block_matches_single_block_functions() {
        let keys = Subkeys::expand(&[0x5A; 32]);
        let pt = pattern();

        let mut block = CipherBlock::clone_from_slice(&pt);
        crypt_block(&keys, Direction::Encrypt, InOut::from(&mut block));
        assert_eq!(block.as_slice(), &encrypt_block(&pt, &keys)[..]);

        let mut out = CipherBlock::default();
        crypt_block(&keys, Direction::Decrypt, InOut::from((&block, &mut out)));
        assert_eq!(out.as_slice(), &pt[..]);
        assert_eq!(out.as_slice(), &decrypt_block(&encrypt_block(&pt, &keys), &keys)[..]);
    }

    #[test]
    fn gather_and_scatter_preserve_block_order() {
        let blocks: [CipherBlock; LANES] =
            core::array::from_fn(|b| CipherBlock::clone_from_slice(&[b as u8; BLOCK_SIZE]));
        let group = gather(&blocks);
        assert!(group.iter().enumerate().all(|(b, block)| block == &[b as u8; BLOCK_SIZE]));

        let mut back: [CipherBlock; LANES] = Default::default();
        scatter(&group, &mut back);
        assert_eq!(back, blocks);
    }
}
