use bigint_core::BigInt;
use indoc::indoc;

#[test]
fn zero() {
    assert_eq!(
        format!("{:?}", BigInt::zero()),
        "BigInt { length: 0, sign: false, digits: [] }"
    );
}

#[test]
fn single_digit() {
    assert_eq!(
        format!("{:?}", BigInt::from(255)),
        "BigInt { length: 1, sign: false, digits: [0xff] }"
    );
    assert_eq!(
        format!("{:?}", BigInt::from(-1)),
        "BigInt { length: 1, sign: true, digits: [0x1] }"
    );
}

#[test]
fn pretty() {
    let expected = indoc! {"
        BigInt {
            length: 1,
            sign: true,
            digits: [
                0xdeadbeef,
            ],
        }"
    };
    assert_eq!(format!("{:#?}", BigInt::from(-0xdeadbeefi64)), expected);
}

#[test]
fn pretty_zero() {
    let expected = indoc! {"
        BigInt {
            length: 0,
            sign: false,
            digits: [],
        }"
    };
    assert_eq!(format!("{:#?}", BigInt::default()), expected);
}

#[test]
fn error() {
    let err = BigInt::from(1).divide(&BigInt::from(2)).unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(Unsupported(Divide))");
    assert_eq!(err.to_string(), "BigInt operation `Divide` is not supported");
}
