use charybdis::{
    Charybdis, KEY_SIZE, active_backend, encrypt_block, key_schedule,
    cipher::{
        AlgorithmName, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit, KeySizeUser,
        generic_array::GenericArray,
    },
};

fn key() -> [u8; KEY_SIZE] {
    core::array::from_fn(|i| i as u8)
}

fn blocks(n: usize) -> Vec<GenericArray<u8, <Charybdis as BlockSizeUser>::BlockSize>> {
    (0..n)
        .map(|i| GenericArray::clone_from_slice(&[(i as u8).wrapping_mul(37); 64]))
        .collect()
}

#[test]
fn sizes() {
    assert_eq!(Charybdis::key_size(), 32);
    assert_eq!(Charybdis::block_size(), 64);
}

#[test]
fn matches_free_functions() {
    let cipher = Charybdis::new_from_slice(&key()).unwrap();
    let keys = key_schedule(&key());

    let mut block = GenericArray::clone_from_slice(&[0xAB; 64]);
    cipher.encrypt_block(&mut block);
    assert_eq!(block.as_slice(), &encrypt_block(&[0xAB; 64], &keys)[..]);
    cipher.decrypt_block(&mut block);
    assert_eq!(block.as_slice(), &[0xAB; 64][..]);
}

#[test]
fn parallel_blocks_match_single_blocks() {
    let cipher = Charybdis::new_from_slice(&key()).unwrap();
    for n in [1, 7, 8, 9, 16, 21] {
        let mut many = blocks(n);
        cipher.encrypt_blocks(&mut many);

        let mut one_by_one = blocks(n);
        for b in one_by_one.iter_mut() {
            cipher.encrypt_block(b);
        }
        assert_eq!(many, one_by_one, "n={n}");

        cipher.decrypt_blocks(&mut many);
        assert_eq!(many, blocks(n));
    }
}

#[test]
fn wrong_key_length_is_rejected() {
    assert!(Charybdis::new_from_slice(&[0; 31]).is_err());
    assert!(Charybdis::new_from_slice(&[0; 33]).is_err());
}

#[test]
fn name_and_debug() {
    struct Name;
    impl core::fmt::Display for Name {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            Charybdis::write_alg_name(f)
        }
    }
    assert_eq!(Name.to_string(), charybdis::NAME);

    let cipher = Charybdis::new_from_slice(&key()).unwrap();
    assert_eq!(format!("{cipher:?}"), "Charybdis { .. }");
}

#[test]
fn batch_context_uses_active_backend() {
    let cipher = Charybdis::new_from_slice(&key()).unwrap();
    let ctx = cipher.batch_context().unwrap();
    assert_eq!(ctx.backend(), Some(active_backend()));
}

#[test]
fn clone_encrypts_identically() {
    let a = Charybdis::new_from_slice(&[0x77; KEY_SIZE]).unwrap();
    let b = a.clone();
    let mut x = blocks(3);
    let mut y = blocks(3);
    a.encrypt_blocks(&mut x);
    b.encrypt_blocks(&mut y);
    assert_eq!(x, y);
}
