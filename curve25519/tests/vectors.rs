//! Known-answer tests for Curve25519.
//!
//! The scalar-multiplication anchor and the Diffie–Hellman transcript were
//! produced with an independent big-integer implementation of the curve.

use curve25519::{
    AffinePoint, CompressedEdwardsY, ExtendedPoint, FieldElement, MontgomeryXPoint, Scalar,
    diffie_hellman, scratchpad,
};
use hex_literal::hex;
use twedwards::Error;

/// First party's secret scalar (little-endian, reduced mod ℓ).
const KA: Scalar =
    Scalar::from_hex_vartime("e1349ceee7b3efc7bd92b6f8f87ad5ec38281706f5e4d3c2b1a09f8e7d6c5b0a");

/// Second party's secret scalar.
const KB: Scalar =
    Scalar::from_hex_vartime("1f1e1d1c1b1a191817161514131211100f0e0d0c0b0a09080706050403020100");

#[test]
fn scalar_mul_anchor() {
    let p = ExtendedPoint::generator().mul_vartime(&KA).to_affine();
    assert_eq!(
        p.x(),
        FieldElement::from_hex_vartime(
            "8b9e1f9a0ca0fd3b26999c61a846eb5f1b001931109015b58b4a9685b73bd926"
        )
    );
    assert_eq!(
        p.y(),
        FieldElement::from_hex_vartime(
            "537c41ac1319288e0252ae7354350879de01e1a5f094db04a412f9ae931df242"
        )
    );

    let mut pad = scratchpad();
    assert_eq!(
        ExtendedPoint::generator().scalar_mul(&KA, &mut pad),
        p.to_extended()
    );
}

#[test]
fn generator_compresses_to_standard_encoding() {
    let enc = CompressedEdwardsY::from_affine(&AffinePoint::GENERATOR);
    assert_eq!(
        enc.as_bytes(),
        &hex!("5866666666666666666666666666666666666666666666666666666666666666")
    );
    assert_eq!(enc.decompress().unwrap(), AffinePoint::GENERATOR);
}

#[test]
fn compressed_roundtrip_with_sign() {
    let p = ExtendedPoint::generator().mul_vartime(&KB).to_affine();
    let enc = CompressedEdwardsY::from_affine(&p);
    assert_eq!(enc.decompress().unwrap(), p);

    let minus = CompressedEdwardsY::from_affine(&-p);
    assert_ne!(enc, minus);
    assert_eq!(minus.decompress().unwrap(), -p);
}

#[test]
fn decompress_rejects_bad_encodings() {
    // y = p is not a canonical field element encoding.
    let mut unreduced = [0xff; 32];
    unreduced[0] = 0xed;
    unreduced[31] = 0x7f;
    assert_eq!(
        CompressedEdwardsY(unreduced).decompress(),
        Err(Error::InvalidEncoding)
    );

    // y = 2 is the y-coordinate of no curve point.
    let mut off_curve = [0u8; 32];
    off_curve[0] = 2;
    assert_eq!(
        CompressedEdwardsY(off_curve).decompress(),
        Err(Error::InvalidEncoding)
    );

    // The identity has x = 0; a set sign bit must be rejected.
    let mut bad_sign = [0u8; 32];
    bad_sign[0] = 1;
    bad_sign[31] = 0x80;
    assert_eq!(
        CompressedEdwardsY(bad_sign).decompress(),
        Err(Error::InvalidEncoding)
    );
}

#[test]
fn diffie_hellman_transcript() {
    let mut pad = scratchpad();
    let gu = MontgomeryXPoint::from_edwards(&ExtendedPoint::generator()).to_affine_u();
    // The Edwards generator maps to the standard X25519 base point u = 9.
    assert_eq!(gu, FieldElement::from_u64(9));

    let pa = diffie_hellman(&KA, &gu, &mut pad);
    let pb = diffie_hellman(&KB, &gu, &mut pad);
    assert_eq!(
        pa,
        FieldElement::from_hex_vartime(
            "59370d610614d471191d150ff40035589daa8454c9fc2c5802dc2d7632a7cb4d"
        )
    );
    assert_eq!(
        pb,
        FieldElement::from_hex_vartime(
            "2aaab746186c706052c46accdbd66e99b2dd6d934f6f7d061c89a733bb0c237b"
        )
    );

    let shared = FieldElement::from_hex_vartime(
        "20d25093cd1a2fc4c28dab76913c1b5788ea365886d80353c83a5cabdd92f704",
    );
    assert_eq!(diffie_hellman(&KA, &pb, &mut pad), shared);
    assert_eq!(diffie_hellman(&KB, &pa, &mut pad), shared);
}
