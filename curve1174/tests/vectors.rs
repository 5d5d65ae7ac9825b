//! Known-answer tests for Curve1174.
//!
//! The scalar-multiplication anchor and the Diffie–Hellman transcript were
//! produced with an independent big-integer implementation of the curve;
//! the Decaf encodings follow the cofactor-4 variant of the Decaf paper.

use curve1174::{
    CompressedDecaf, DecafPoint, ExtendedPoint, FieldElement, MontgomeryXPoint, Scalar,
    diffie_hellman, from_compressed, scratchpad,
};
use hex_literal::hex;
use twedwards::Error;

/// First party's secret scalar (little-endian, reduced mod q).
const KA: Scalar =
    Scalar::from_hex_vartime("504f3e2d1c0bfae9d8c7b6a594837261504f3e2d1c0b9a8f7e6d5b4a2c1e3f00");

/// Second party's secret scalar.
const KB: Scalar =
    Scalar::from_hex_vartime("44d66581a8f9822fe6c3e9bfc1792ed091fc889c997a68350e068865f29cb201");

/// Decaf encodings of `[k]G` for `k = 1..=7`.
const DECAF_MULTIPLES: [[u8; 32]; 7] = [
    hex!("f4e4a2a8a353e403354ca69ebb9e9deaf468f9f042cdcdc401b18a7c94158a01"),
    hex!("f2e71d2ff2b8840ad966bf46f9aa31879fc9ee10cd8676ab8e78f2023aabab05"),
    hex!("faa361fcb49fa83a26eb52fe905045f183637d1457bd87cced02086571637601"),
    hex!("98ae4643ebd7e19ade1d723a858f92627c3b915ba4a220c62dcd88d1da673b07"),
    hex!("806d10ee956614c4ffe882d7543ce46ab3022026ca0e3bba14384773c22dd206"),
    hex!("5efc9722ee9791c7b71dddef2edc6a09b55c3e9d3602a6e7f41eb769e2648606"),
    hex!("68a35a29ea823d7a41a062c2730807ac5d4f202ad2415d134e9f8ec506a71704"),
];

#[test]
fn scalar_mul_anchor() {
    let p = ExtendedPoint::generator().mul_vartime(&KA).to_affine();
    assert_eq!(
        p.x(),
        FieldElement::from_hex_vartime(
            "d8ec77c88ffffae301992d42c9f9bd18e77b85cd7d2f9d240ae6b91c17f27707"
        )
    );
    assert_eq!(
        p.y(),
        FieldElement::from_hex_vartime(
            "3429489c67798a192006479e00d3a97b20402a0ac2d0efd63aaa8180dc838c02"
        )
    );

    let mut pad = scratchpad();
    assert_eq!(
        ExtendedPoint::generator().scalar_mul(&KA, &mut pad),
        p.to_extended()
    );
}

#[test]
fn decaf_small_multiples() {
    let g = DecafPoint::generator();
    let mut p = DecafPoint::IDENTITY;
    for encoding in &DECAF_MULTIPLES {
        p += g;
        assert_eq!(p.compress().as_bytes(), encoding.as_slice());
        assert_eq!(from_compressed(encoding).unwrap(), p);
    }
}

#[test]
fn decaf_rejects_non_canonical() {
    // s = 2 is the canonical encoding of no subgroup element: the decoding
    // square root is of a non-square.
    let bad = hex!("0200000000000000000000000000000000000000000000000000000000000000");
    assert_eq!(from_compressed(&bad), Err(Error::InvalidEncoding));

    // s = p is not a canonical field element encoding.
    let mut unreduced = [0xff; 32];
    unreduced[0] = 0xf7;
    unreduced[31] = 0x07;
    assert_eq!(from_compressed(&unreduced), Err(Error::InvalidEncoding));
}

#[test]
fn diffie_hellman_transcript() {
    let mut pad = scratchpad();
    let gu = MontgomeryXPoint::from_edwards(&ExtendedPoint::generator()).to_affine_u();
    assert_eq!(
        gu,
        FieldElement::from_hex_vartime(
            "122dadefd219e8005a5a7a4595b7fc9dfd43dce314a94f4340cd31f9f61da305"
        )
    );

    let pa = diffie_hellman(&KA, &gu, &mut pad);
    let pb = diffie_hellman(&KB, &gu, &mut pad);
    assert_eq!(
        pa,
        FieldElement::from_hex_vartime(
            "9787f2f3ceae6ab0a6c2e4d27c9f203a8bffa562c4175fe5cdfc3f7b80011e03"
        )
    );
    assert_eq!(
        pb,
        FieldElement::from_hex_vartime(
            "978c6fccdba7d92955fef6fe3e305a5f0e3b17bfd13a5e77542354f44a3bc800"
        )
    );

    let shared = FieldElement::from_hex_vartime(
        "018b661f3ce3a2a6dc7f5405cb9392763225988997c4084a5682771b37fb2a00",
    );
    assert_eq!(diffie_hellman(&KA, &pb, &mut pad), shared);
    assert_eq!(diffie_hellman(&KB, &pa, &mut pad), shared);
}

#[test]
fn identity_compresses_to_zeros() {
    assert_eq!(
        DecafPoint::IDENTITY.compress(),
        CompressedDecaf::identity()
    );
    assert_eq!(from_compressed(&[0u8; 32]).unwrap(), DecafPoint::IDENTITY);
}
