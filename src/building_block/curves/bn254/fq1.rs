use crate::building_block::{
  curves::bn254::params::Params,
  field::{
    prime_field::PrimeField,
    prime_field_elem::PrimeFieldElem,
  },
};
use num_bigint::BigUint;
use std::sync::Arc;

pub type Fq1 = PrimeFieldElem;

impl Fq1 {
  pub fn base_field() -> Arc<PrimeField> {
    Params::base_prime_field()
  }

  pub fn fq1_zero() -> Fq1 {
    let f = Fq1::base_field();
    PrimeFieldElem::new(&f, &BigUint::from(0u8))
  }

  pub fn fq1_one() -> Fq1 {
    let f = Fq1::base_field();
    PrimeFieldElem::new(&f, &BigUint::from(1u8))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_and_one() {
    assert!(Fq1::fq1_zero().is_zero());
    assert_eq!(Fq1::fq1_one().e, BigUint::from(1u8));
    assert_eq!(Fq1::fq1_zero() + Fq1::fq1_one(), Fq1::fq1_one());
  }
}
