use polynomial::{DisplayStyle, Polynomial, PolynomialError, Rational};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PolynomialError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dividend = Polynomial::from_integers(&[6, -2, 0, -4, 0, 3, 3])?;
    let divisor = Polynomial::from_integers(&[2, 0, 2, -3])?;
    let (quotient, remainder) = dividend.divmod(&divisor)?;

    println!("dividend:  {dividend}");
    println!("divisor:   {divisor}");
    println!("quotient:  {}", quotient.display_with(DisplayStyle::Unicode));
    println!("remainder: {remainder:#}");
    println!("exact:     {quotient:?} {remainder:?}");

    assert_eq!(&quotient * &divisor + &remainder, dividend);

    let x = Rational::new(1.into(), 2.into());
    println!("q(1/2) = {}", quotient.eval(x.clone()));
    println!("q(0.5) = {}", quotient.eval(0.5f64));

    match dividend.divmod(Polynomial::ZERO) {
        Err(err) => println!("{err} ({:?})", err.kind()),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
