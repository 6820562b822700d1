use charybdis::{
    Backend, BatchContext, Error, Subkeys, batch_context_clear, batch_context_init, batch_decrypt,
    batch_encrypt, decrypt_block, encrypt_block, key_schedule,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const BLOCK: usize = charybdis::BLOCK_SIZE;

fn available_backends() -> Vec<Backend> {
    [Backend::Portable, Backend::Avx2]
        .into_iter()
        .filter(|b| b.is_available())
        .collect()
}

fn random_keys(rng: &mut StdRng) -> Subkeys {
    key_schedule(&rng.r#gen())
}

fn scalar_encrypt(keys: &Subkeys, data: &[u8]) -> Vec<u8> {
    data.chunks_exact(BLOCK)
        .flat_map(|b| encrypt_block(b.try_into().unwrap(), keys))
        .collect()
}

fn scalar_decrypt(keys: &Subkeys, data: &[u8]) -> Vec<u8> {
    data.chunks_exact(BLOCK)
        .flat_map(|b| decrypt_block(b.try_into().unwrap(), keys))
        .collect()
}

#[test]
fn matches_scalar_for_every_count() {
    let mut rng = StdRng::seed_from_u64(0xC4A2_7BD1);
    let keys = random_keys(&mut rng);

    for backend in available_backends() {
        let ctx = BatchContext::with_backend(&keys, backend).unwrap();
        for n in 1..=33 {
            let mut pt = vec![0u8; n * BLOCK];
            rng.fill(&mut pt[..]);

            let mut ct = vec![0u8; pt.len()];
            batch_encrypt(&ctx, &pt, &mut ct).unwrap();
            assert_eq!(ct, scalar_encrypt(&keys, &pt), "{backend} encrypt n={n}");

            let mut back = vec![0u8; ct.len()];
            batch_decrypt(&ctx, &ct, &mut back).unwrap();
            assert_eq!(back, scalar_decrypt(&keys, &ct), "{backend} decrypt n={n}");
            assert_eq!(back, pt);
        }
    }
}

#[test]
fn zero_blocks_is_rejected() {
    let keys = key_schedule(&[9; 32]);
    for backend in available_backends() {
        let ctx = BatchContext::with_backend(&keys, backend).unwrap();
        assert_eq!(batch_encrypt(&ctx, &[], &mut []), Err(Error::EmptyInput));
        assert_eq!(ctx.decrypt_in_place(&mut []), Err(Error::EmptyInput));
    }
}

#[test]
fn in_place_matches_out_of_place() {
    let mut rng = StdRng::seed_from_u64(17);
    let keys = random_keys(&mut rng);
    let mut buf = vec![0u8; 19 * BLOCK];
    rng.fill(&mut buf[..]);

    for backend in available_backends() {
        let ctx = BatchContext::with_backend(&keys, backend).unwrap();
        let mut out = vec![0u8; buf.len()];
        ctx.encrypt(&buf, &mut out).unwrap();

        let mut inplace = buf.clone();
        ctx.encrypt_in_place(&mut inplace).unwrap();
        assert_eq!(inplace, out);

        ctx.decrypt_in_place(&mut inplace).unwrap();
        assert_eq!(inplace, buf);
    }
}

#[test]
fn backends_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    let keys = random_keys(&mut rng);
    let mut pt = vec![0u8; 24 * BLOCK];
    rng.fill(&mut pt[..]);

    let outputs: Vec<Vec<u8>> = available_backends()
        .into_iter()
        .map(|backend| {
            let ctx = BatchContext::with_backend(&keys, backend).unwrap();
            let mut ct = vec![0u8; pt.len()];
            ctx.encrypt(&pt, &mut ct).unwrap();
            ct
        })
        .collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn malformed_buffers() {
    let keys = key_schedule(&[1; 32]);
    let ctx = BatchContext::with_backend(&keys, Backend::Portable).unwrap();

    let mut out = [0u8; 2 * BLOCK];
    assert_eq!(ctx.encrypt(&[0; 100], &mut out), Err(Error::PartialBlock(100)));
    assert_eq!(
        ctx.encrypt(&[0; BLOCK], &mut out),
        Err(Error::LengthMismatch { expected: BLOCK, got: 2 * BLOCK })
    );
    assert_eq!(ctx.encrypt_in_place(&mut [0; BLOCK - 1]), Err(Error::PartialBlock(BLOCK - 1)));
    assert_eq!(out, [0; 2 * BLOCK]);
}

#[test]
fn init_reports_missing_avx2() {
    let keys = key_schedule(&[2; 32]);
    match batch_context_init(&keys) {
        Ok(ctx) => {
            assert!(charybdis::avx2_available());
            assert_eq!(ctx.backend(), Some(Backend::Avx2));
        }
        Err(err) => {
            assert!(!charybdis::avx2_available());
            assert_eq!(err, Error::Unsupported(Backend::Avx2));
        }
    }
}

#[test]
fn clear_lifecycle() {
    let keys = key_schedule(&[3; 32]);
    for backend in available_backends() {
        let mut ctx = BatchContext::with_backend(&keys, backend).unwrap();
        let mut buf = [0u8; 9 * BLOCK];
        ctx.encrypt_in_place(&mut buf).unwrap();
        assert!(!ctx.is_cleared());

        batch_context_clear(Some(&mut ctx));
        assert!(ctx.is_cleared());
        assert_eq!(ctx.backend(), None);
        assert_eq!(ctx.decrypt_in_place(&mut buf), Err(Error::InvalidContext));
        assert_eq!(ctx.encrypt(&buf.clone(), &mut buf), Err(Error::InvalidContext));

        batch_context_clear(Some(&mut ctx));
        assert!(ctx.is_cleared());
    }
    batch_context_clear(None);
}

#[test]
fn context_is_shareable_across_threads() {
    let keys = key_schedule(&[4; 32]);
    let ctx = BatchContext::with_backend(&keys, Backend::Portable).unwrap();
    let expected = scalar_encrypt(&keys, &[0x5A; 10 * BLOCK]);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut buf = [0x5A; 10 * BLOCK];
                ctx.encrypt_in_place(&mut buf).unwrap();
                assert_eq!(&buf[..], &expected[..]);
            });
        }
    });
}

#[test]
fn unsupported_error_names_the_backend() {
    let msg = Error::Unsupported(Backend::Avx2).to_string();
    assert_eq!(msg, "AVX2 backend is not available on this host");
    assert_eq!(Backend::Portable.to_string(), "portable");
}
