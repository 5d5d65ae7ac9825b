//! Known-answer tests for Ed448-Goldilocks.
//!
//! The scalar-multiplication anchor and the Diffie–Hellman transcript were
//! produced with an independent big-integer implementation of the curve;
//! the Decaf encodings follow the cofactor-4 variant of the Decaf paper.

use ed448goldilocks::{
    DecafPoint, ExtendedPoint, FieldElement, MontgomeryXPoint, Scalar, diffie_hellman,
    from_compressed, scratchpad,
};
use hex_literal::hex;
use twedwards::Error;

/// First party's secret scalar (little-endian, reduced mod L).
const KA: Scalar = Scalar::from_hex_vartime(
    "c5a88e9b1ac23d3ae559968bc3239e9194c59c2ab5561356dc30f0d5f1e42ce17615164d27004996fc100f84348d60136bb9d6a28bec7326",
);

/// Second party's secret scalar.
const KB: Scalar = Scalar::from_hex_vartime(
    "3a78dd7acade51a64479b03b14dffd3c46e5e29555c3a3d22f6cf4f20a8eae8f7249f280623ea04d2ba19c8eb0098a1101663993f1a31819",
);

/// Decaf encodings of `[k]G` for `k = 1..=3`.
const DECAF_MULTIPLES: [[u8; 56]; 3] = [
    hex!(
        "9022bbe9c7c519bc229e0fd85d3dcc914331c4986a2baddab417715b05af1cd306370c997012b469984647815b24c93691d63a53681043b0"
    ),
    hex!(
        "6666666666666666666666666666666666666666666666666666666633333333333333333333333333333333333333333333333333333333"
    ),
    hex!(
        "c082f6cbf7f5729d8eca9b0e61932998cb6bd9ac0a072835e814aad803a23478b0e4703fe9f1de5e443f85ef6f35929f2543e6a1ccf7b340"
    ),
];

#[test]
fn scalar_mul_anchor() {
    let p = ExtendedPoint::generator().mul_vartime(&KA).to_affine();
    assert_eq!(
        p.x(),
        FieldElement::from_hex_vartime(
            "2b018e78442ccfe853b722094ab4e9c2a2169dec8f339c5168a0d93b5b7e6808445885d82ec0b7f2272e5cd822d9533bcdc2562c4ec50591"
        )
    );
    assert_eq!(
        p.y(),
        FieldElement::from_hex_vartime(
            "902594ca41fd35213f7442682a96db697f0b9aac789feb4bf9948051f07148f7ed6d314fe560da3674c330ca8caa285a82cd0b14eb8dde51"
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
    // s = 4 is the canonical encoding of no subgroup element: the decoding
    // square root is of a non-square.
    let mut bad = [0u8; 56];
    bad[0] = 4;
    assert_eq!(from_compressed(&bad), Err(Error::InvalidEncoding));

    // s = 1 is odd, hence negative under the sign convention.
    let mut negative = [0u8; 56];
    negative[0] = 1;
    assert_eq!(from_compressed(&negative), Err(Error::InvalidEncoding));
}

#[test]
fn diffie_hellman_transcript() {
    let mut pad = scratchpad();
    let gu = MontgomeryXPoint::from_edwards(&ExtendedPoint::generator()).to_affine_u();
    assert_eq!(
        gu,
        FieldElement::from_hex_vartime(
            "a60fe88738e4cdbe23d7deea6216805584c9b9f259cf98c1a5ed713d80976a18dbd565ff117517b7ae209185e1078e144fa3383933dbf253"
        )
    );

    let pa = diffie_hellman(&KA, &gu, &mut pad);
    let pb = diffie_hellman(&KB, &gu, &mut pad);
    assert_eq!(
        pa,
        FieldElement::from_hex_vartime(
            "c7fc34863cf981f7603e57c99b9fd5baed18f7a89c958e36d56d35222a1b1afe279b441c2f307c6d402ce1144c187553872de612411bdb45"
        )
    );
    assert_eq!(
        pb,
        FieldElement::from_hex_vartime(
            "dbb96ef1b492c49e3732c4a71f9058995af9af74e2811265cb5925dcce010fd89e2ed10f71c054bbf34d74a2d0242573cf002875732b4c77"
        )
    );

    let shared = FieldElement::from_hex_vartime(
        "5c8991ab9e99d1604a91f87a0b45c689cd00d81f8ecb4340adf6d35f94de7951afb2c349ce771eb27618851a47857e9840b60032be366b03",
    );
    assert_eq!(diffie_hellman(&KA, &pb, &mut pad), shared);
    assert_eq!(diffie_hellman(&KB, &pa, &mut pad), shared);
}
