use num_traits::Zero;
use polynomial::{poly, DisplayStyle, ErrorKind, Polynomial, PolynomialError, Rational};
use rand::{rngs::StdRng, SeedableRng};

type Poly = Polynomial;

fn rat(numer: i64, denom: i64) -> Rational {
    Rational::new(numer.into(), denom.into())
}

fn ints(coeffs: &[i64]) -> Poly {
    Poly::from_integers(coeffs).unwrap()
}

#[test]
fn test_construction() {
    assert_eq!(poly![].unwrap(), Poly::ZERO);

    let err = poly![0, 3].unwrap_err();
    assert_eq!(err, PolynomialError::LeadingZero);
    assert_eq!(err.kind(), ErrorKind::Value);

    let err = Poly::from_f64s(&[1.0, 3.0, f64::INFINITY, 4.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    // Type errors are reported before the leading coefficient is checked.
    let err = Poly::from_f64s(&[0.0, f64::NAN]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_add_sub_padding() {
    let a = ints(&[1, 7, 0, 4]);
    let b = ints(&[-9, 2, 0]);
    assert_eq!(&a + &b, ints(&[1, -2, 2, 4]));
    assert_eq!(&b + &a, ints(&[1, -2, 2, 4]));
    assert_eq!(&a - &b, ints(&[1, 16, -2, 4]));
    assert_eq!(&b - &a, -ints(&[1, 16, -2, 4]));
}

#[test]
fn test_add_cancellation() {
    let sum = ints(&[1, 7, 0, 4]) + ints(&[-1, -7, 2, 0]);
    assert_eq!(sum, ints(&[2, 4]));
    assert_eq!(sum.degree(), 1);

    let f = ints(&[3, 0, -1]);
    assert_eq!(&f + -&f, Poly::ZERO);
    assert_eq!(&f - &f, Poly::ZERO);
}

#[test]
fn test_scalar_ops() {
    let f = ints(&[1, 7, 0, 4]);
    assert_eq!(&f + 3, ints(&[1, 7, 0, 7]));
    assert_eq!(3i32 + &f, &f + 3);
    assert_eq!(5i64 - &f, -(&f - 5));
    assert_eq!(&f * rat(1, 2), Poly::new(vec![rat(1, 2), rat(7, 2), rat(0, 1), rat(2, 1)]).unwrap());
    assert_eq!(rat(1, 2) * &f, &f * rat(1, 2));
    assert_eq!(ints(&[5]) - 5, Poly::ZERO);
    assert_eq!(&f * 0, Poly::ZERO);
}

#[test]
fn test_mul() {
    let product = ints(&[1, 7, 0, 4]) * ints(&[-9, 2, 0]);
    assert_eq!(product, ints(&[-9, -61, 14, -36, 8, 0]));
    assert_eq!(product.degree(), 5);
    assert_eq!(ints(&[1, 7, 0, 4]) * Poly::ZERO, Poly::ZERO);
}

#[test]
fn test_divmod() {
    let dividend = ints(&[4, -1, 2, 1, 0, -1]);
    let divisor = ints(&[1, 0, 1]);
    let (q, r) = dividend.divmod(&divisor).unwrap();
    assert_eq!(q, ints(&[4, -1, -2, 2]));
    assert_eq!(r, ints(&[2, -3]));
    assert_eq!(&q * &divisor + &r, dividend);

    assert_eq!(dividend.floor_div(&divisor).unwrap(), q);
    assert_eq!(dividend.modulo(&divisor).unwrap(), r);
    assert_eq!(&dividend / &divisor, q);
    assert_eq!(&dividend % &divisor, r);
}

#[test]
fn test_divmod_low_degree_dividend() {
    let (q, r) = ints(&[12]).divmod(ints(&[2, -1])).unwrap();
    assert_eq!(q, Poly::ZERO);
    assert_eq!(r, ints(&[12]));
}

#[test]
fn test_divmod_errors() {
    let f = ints(&[2, -1]);
    for err in [
        f.divmod(Poly::ZERO).unwrap_err(),
        f.divmod(0).unwrap_err(),
        f.divmod(Rational::zero()).unwrap_err(),
        f.floor_div(Poly::ZERO).unwrap_err(),
        f.modulo(0).unwrap_err(),
    ] {
        assert_eq!(err, PolynomialError::DivisionByZero);
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
    assert_eq!(Poly::ZERO.divmod(&f).unwrap(), (Poly::ZERO, Poly::ZERO));
}

#[test]
fn test_eval() {
    let f = ints(&[-1, 17, 0, 3]);
    assert_eq!(f.eval(rat(4, 1)), rat(211, 1));
    assert_eq!(f.eval(4.0f64), 211.0);
    assert_eq!(f.as_fn::<Rational>()(rat(4, 1)), f.eval(rat(4, 1)));
    assert_eq!(Poly::ZERO.eval(rat(27, 1)), Rational::zero());
    assert_eq!(Poly::ZERO.eval(274.0f64), 0.0);
}

#[test]
fn test_rendering() {
    let f = ints(&[1, 7, 0, 4]);
    assert_eq!(f.to_string(), "f(x) = x^3 + 7x^2 + 4");
    assert_eq!(format!("{f:#}"), "f(x) = x³ + 7x² + 4");
    assert_eq!(
        f.display_with(DisplayStyle::Unicode).to_string(),
        format!("{f:#}")
    );
    assert_eq!(format!("{f:?}"), "Polynomial(1, 7, 0, 4)");
    assert_eq!(Poly::ZERO.to_string(), "f(x) = 0");
    assert_eq!(format!("{:?}", Poly::ZERO), "Polynomial()");
}

#[test]
fn test_exact_form_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for degree in 0..6 {
        let f = Poly::random(degree, &mut rng);
        assert_eq!(f.to_exact_string().parse::<Poly>().unwrap(), f);
    }
}

#[test]
fn test_serde_round_trip() {
    let f = Poly::new(vec![rat(3, 1), rat(-1, 1), rat(-3, 1), rat(7, 2)]).unwrap();
    let bytes = bincode::serialize(&f).unwrap();
    let g: Poly = bincode::deserialize(&bytes).unwrap();
    assert_eq!(f, g);

    let zero_bytes = bincode::serialize(&Poly::ZERO).unwrap();
    assert_eq!(bincode::deserialize::<Poly>(&zero_bytes).unwrap(), Poly::ZERO);
}

#[test]
fn test_deserialize_rejects_leading_zero() {
    let raw = vec![Rational::zero(), rat(1, 1)];
    let bytes = bincode::serialize(&raw).unwrap();
    assert!(bincode::deserialize::<Poly>(&bytes).is_err());
}

#[test]
fn test_shared_across_threads() {
    let f = ints(&[2, 0, -5, -9]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let f = f.clone();
            std::thread::spawn(move || f.eval(rat(i, 1)))
        })
        .collect();
    let values: Vec<Rational> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected: Vec<Rational> = (0..4).map(|i| f.eval(rat(i, 1))).collect();
    assert_eq!(values, expected);
}
