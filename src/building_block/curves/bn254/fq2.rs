use crate::building_block::{
  curves::bn254::fq1::Fq1,
  zero::Zero,
};
use num_bigint::BigUint;
use std::{
  fmt,
  ops::{Add, Mul, Neg, Sub},
};

// a + b*u with u^2 = -1; stored as { u1: b, u0: a }
#[derive(Debug, Clone)]
pub struct Fq2 {
  pub u1: Fq1,
  pub u0: Fq1,
}

impl Fq2 {
  pub fn new(u1: &Fq1, u0: &Fq1) -> Self {
    Fq2 { u1: u1.clone(), u0: u0.clone() }
  }

  pub fn one() -> Self {
    Fq2 {
      u1: Fq1::fq1_zero(),
      u0: Fq1::fq1_one(),
    }
  }

  pub fn inv(&self) -> Self {
    // 1/(a + bu) = (a - bu)/(a^2 + b^2)
    let factor = (&self.u1 * &self.u1 + &self.u0 * &self.u0).inv();
    Self {
      u1: self.u1.negate() * &factor,
      u0: &self.u0 * &factor,
    }
  }

  pub fn sq(&self) -> Self {
    self * self
  }

  pub fn conj(&self) -> Self {
    Self {
      u1: self.u1.negate(),
      u0: self.u0.clone(),
    }
  }

  // multiply by the sextic non-residue xi = 9 + u
  pub fn mul_by_xi(&self) -> Self {
    Self {
      u1: &self.u0 + (&self.u1 * 9u8),
      u0: (&self.u0 * 9u8) - &self.u1,
    }
  }

  pub fn scale(&self, k: &Fq1) -> Self {
    Self {
      u1: &self.u1 * k,
      u0: &self.u0 * k,
    }
  }

  // square-and-multiply from the exponent's most significant bit
  pub fn pow(&self, e: &BigUint) -> Self {
    let mut res = Fq2::one();
    for i in (0..e.bits()).rev() {
      res = res.sq();
      if e.bit(i) {
        res = &res * self;
      }
    }
    res
  }
}

impl Zero<Fq2> for Fq2 {
  fn zero() -> Self {
    Self {
      u1: Fq1::fq1_zero(),
      u0: Fq1::fq1_zero(),
    }
  }

  fn is_zero(&self) -> bool {
    self.u0.is_zero() && self.u1.is_zero()
  }
}

impl PartialEq for Fq2 {
  fn eq(&self, other: &Self) -> bool {
    self.u1 == other.u1 && self.u0 == other.u0
  }
}

impl Eq for Fq2 {}

impl fmt::Display for Fq2 {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} + {}u", self.u0, self.u1)
  }
}

macro_rules! impl_neg {
  ($target: ty) => {
    impl Neg for $target {
      type Output = Fq2;

      fn neg(self) -> Self::Output {
        Fq2::zero() - self
      }
    }
  };
}
impl_neg!(Fq2);
impl_neg!(&Fq2);

macro_rules! impl_add {
  ($rhs: ty, $target: ty) => {
    impl Add<$rhs> for $target {
      type Output = Fq2;

      fn add(self, rhs: $rhs) -> Self::Output {
        Fq2 {
          u1: &self.u1 + &rhs.u1,
          u0: &self.u0 + &rhs.u0,
        }
      }
    }
  };
}
impl_add!(Fq2, Fq2);
impl_add!(Fq2, &Fq2);
impl_add!(&Fq2, Fq2);
impl_add!(&Fq2, &Fq2);

macro_rules! impl_sub {
  ($rhs: ty, $target: ty) => {
    impl Sub<$rhs> for $target {
      type Output = Fq2;

      fn sub(self, rhs: $rhs) -> Self::Output {
        Fq2 {
          u1: &self.u1 - &rhs.u1,
          u0: &self.u0 - &rhs.u0,
        }
      }
    }
  };
}
impl_sub!(Fq2, Fq2);
impl_sub!(Fq2, &Fq2);
impl_sub!(&Fq2, Fq2);
impl_sub!(&Fq2, &Fq2);

macro_rules! impl_mul {
  ($rhs: ty, $target: ty) => {
    impl Mul<$rhs> for $target {
      type Output = Fq2;

      fn mul(self, rhs: $rhs) -> Self::Output {
        // (a + bu)(c + du) = (ac - bd) + (ad + bc)u
        Fq2 {
          u1: &self.u0 * &rhs.u1 + &self.u1 * &rhs.u0,
          u0: &self.u0 * &rhs.u0 - &self.u1 * &rhs.u1,
        }
      }
    }
  };
}
impl_mul!(Fq2, Fq2);
impl_mul!(Fq2, &Fq2);
impl_mul!(&Fq2, Fq2);
impl_mul!(&Fq2, &Fq2);

macro_rules! impl_small_scalar_mul {
  ($target: ty) => {
    impl Mul<u8> for $target {
      type Output = Fq2;

      fn mul(self, rhs: u8) -> Self::Output {
        let f = Fq1::base_field();
        self.scale(&f.elem(&rhs))
      }
    }
  };
}
impl_small_scalar_mul!(Fq2);
impl_small_scalar_mul!(&Fq2);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::building_block::curves::bn254::params::Params;

  fn sample() -> (Fq2, Fq2) {
    let f = Params::base_prime_field();
    let a = Fq2::new(&f.elem(&5u8), &f.elem(&3u8));
    let b = Fq2::new(&f.elem(&7u8), &f.elem(&11u8));
    (a, b)
  }

  #[test]
  fn mul_follows_complex_identity() {
    let f = Params::base_prime_field();
    let (a, b) = sample();
    // (3 + 5u)(11 + 7u) = (33 - 35) + (21 + 55)u = -2 + 76u
    let exp = Fq2::new(&f.elem(&76u8), &f.elem_from_signed(&-2));
    assert_eq!(a * b, exp);
  }

  #[test]
  fn inv_cancels() {
    let (a, b) = sample();
    assert_eq!(&a * a.inv(), Fq2::one());
    assert_eq!(&b * b.inv(), Fq2::one());
  }

  #[test]
  fn neg_cancels() {
    let (a, b) = sample();
    assert_eq!(-&a + &a, Fq2::zero());
    assert_eq!(-&b + &b, Fq2::zero());
  }

  #[test]
  fn mul_by_xi_matches_generic_mul() {
    let (a, b) = sample();
    assert_eq!(a.mul_by_xi(), &a * Params::xi());
    assert_eq!(b.mul_by_xi(), &b * Params::xi());
  }

  #[test]
  fn pow_small_exponents() {
    let (a, _) = sample();
    assert_eq!(a.pow(&BigUint::from(0u8)), Fq2::one());
    assert_eq!(a.pow(&BigUint::from(1u8)), a);
    assert_eq!(a.pow(&BigUint::from(2u8)), a.sq());
    assert_eq!(a.pow(&BigUint::from(5u8)), &a.sq().sq() * &a);
  }

  #[test]
  fn conj_fixes_real_part() {
    let (a, _) = sample();
    let c = a.conj();
    assert_eq!(c.u0, a.u0);
    assert_eq!(c.u1, a.u1.negate());
    // x * conj(x) has no u component
    assert!((&a * &c).u1.is_zero());
  }
}
