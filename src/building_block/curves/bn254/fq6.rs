use crate::building_block::{
  curves::bn254::fq2::Fq2,
  zero::Zero,
};
use std::{
  fmt,
  ops::{Add, Mul, Neg, Sub},
};

// v0 + v1*v + v2*v^2 with v^3 = xi
#[derive(Debug, Clone)]
pub struct Fq6 {
  pub v2: Fq2,
  pub v1: Fq2,
  pub v0: Fq2,
}

impl Fq6 {
  pub fn new(v2: &Fq2, v1: &Fq2, v0: &Fq2) -> Self {
    Fq6 {
      v2: v2.clone(),
      v1: v1.clone(),
      v0: v0.clone(),
    }
  }

  pub fn one() -> Self {
    Fq6 {
      v2: Fq2::zero(),
      v1: Fq2::zero(),
      v0: Fq2::one(),
    }
  }

  // multiply by v: (v0, v1, v2) -> (xi * v2, v0, v1)
  pub fn mul_by_v(&self) -> Self {
    Self {
      v2: self.v1.clone(),
      v1: self.v0.clone(),
      v0: self.v2.mul_by_xi(),
    }
  }

  pub fn inv(&self) -> Self {
    // norm method: c_i below satisfy (sum v_i) * (sum c_i) = t in Fq2
    let t0 = &self.v0 * &self.v0 - (&self.v1 * &self.v2).mul_by_xi();
    let t1 = (&self.v2 * &self.v2).mul_by_xi() - &self.v0 * &self.v1;
    let t2 = &self.v1 * &self.v1 - &self.v0 * &self.v2;
    let factor = (
      &self.v0 * &t0
      + (&self.v2 * &t1).mul_by_xi()
      + (&self.v1 * &t2).mul_by_xi()
    ).inv();
    Self {
      v2: &t2 * &factor,
      v1: &t1 * &factor,
      v0: &t0 * &factor,
    }
  }

  pub fn sq(&self) -> Self {
    self * self
  }
}

impl Zero<Fq6> for Fq6 {
  fn zero() -> Self {
    Self {
      v2: Fq2::zero(),
      v1: Fq2::zero(),
      v0: Fq2::zero(),
    }
  }

  fn is_zero(&self) -> bool {
    self.v2.is_zero() && self.v1.is_zero() && self.v0.is_zero()
  }
}

impl PartialEq for Fq6 {
  fn eq(&self, other: &Self) -> bool {
    self.v2 == other.v2 &&
    self.v1 == other.v1 &&
    self.v0 == other.v0
  }
}

impl Eq for Fq6 {}

impl fmt::Display for Fq6 {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}\n{}\n{}", self.v0, self.v1, self.v2)
  }
}

macro_rules! impl_neg {
  ($target: ty) => {
    impl Neg for $target {
      type Output = Fq6;

      fn neg(self) -> Self::Output {
        Fq6::zero() - self
      }
    }
  };
}
impl_neg!(Fq6);
impl_neg!(&Fq6);

macro_rules! impl_add {
  ($rhs: ty, $target: ty) => {
    impl Add<$rhs> for $target {
      type Output = Fq6;

      fn add(self, rhs: $rhs) -> Self::Output {
        Fq6 {
          v2: &self.v2 + &rhs.v2,
          v1: &self.v1 + &rhs.v1,
          v0: &self.v0 + &rhs.v0,
        }
      }
    }
  };
}
impl_add!(Fq6, Fq6);
impl_add!(Fq6, &Fq6);
impl_add!(&Fq6, Fq6);
impl_add!(&Fq6, &Fq6);

macro_rules! impl_sub {
  ($rhs: ty, $target: ty) => {
    impl Sub<$rhs> for $target {
      type Output = Fq6;

      fn sub(self, rhs: $rhs) -> Self::Output {
        Fq6 {
          v2: &self.v2 - &rhs.v2,
          v1: &self.v1 - &rhs.v1,
          v0: &self.v0 - &rhs.v0,
        }
      }
    }
  };
}
impl_sub!(Fq6, Fq6);
impl_sub!(Fq6, &Fq6);
impl_sub!(&Fq6, Fq6);
impl_sub!(&Fq6, &Fq6);

macro_rules! impl_mul {
  ($rhs: ty, $target: ty) => {
    impl Mul<$rhs> for $target {
      type Output = Fq6;

      fn mul(self, rhs: $rhs) -> Self::Output {
        // schoolbook with v^3 folded back through xi
        let t0 = &self.v0 * &rhs.v0;
        let t1 = &self.v0 * &rhs.v1 + &self.v1 * &rhs.v0;
        let t2 = &self.v0 * &rhs.v2 + &self.v1 * &rhs.v1 + &self.v2 * &rhs.v0;
        let t3 = (&self.v1 * &rhs.v2 + &self.v2 * &rhs.v1).mul_by_xi();
        let t4 = (&self.v2 * &rhs.v2).mul_by_xi();
        Fq6 {
          v2: t2,
          v1: t1 + t4,
          v0: t0 + t3,
        }
      }
    }
  };
}
impl_mul!(Fq6, Fq6);
impl_mul!(Fq6, &Fq6);
impl_mul!(&Fq6, Fq6);
impl_mul!(&Fq6, &Fq6);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::building_block::curves::bn254::params::Params;

  fn sample() -> (Fq6, Fq6) {
    let f = Params::base_prime_field();
    let a2 = Fq2::new(&f.elem(&3u8), &f.elem(&5u8));
    let b2 = Fq2::new(&f.elem(&7u8), &f.elem(&11u8));
    let c2 = Fq2::new(&f.elem(&13u8), &f.elem(&17u8));
    let d2 = Fq2::new(&f.elem(&19u8), &f.elem(&23u8));
    (Fq6::new(&a2, &b2, &c2), Fq6::new(&b2, &c2, &d2))
  }

  #[test]
  fn add_sub_cancel() {
    let (a, b) = sample();
    assert_eq!(&a + &b - &b, a);
  }

  #[test]
  fn mul_by_one_is_identity() {
    let (a, _) = sample();
    assert_eq!(&a * Fq6::one(), a);
  }

  #[test]
  fn inv_cancels() {
    let (a, b) = sample();
    assert_eq!(&a * a.inv(), Fq6::one());
    assert_eq!(&b * b.inv(), Fq6::one());
  }

  #[test]
  fn mul_by_v_matches_generic_mul() {
    let (a, _) = sample();
    let v = Fq6::new(&Fq2::zero(), &Fq2::one(), &Fq2::zero());
    assert_eq!(a.mul_by_v(), &a * v);
  }

  #[test]
  fn neg_cancels() {
    let (a, _) = sample();
    assert_eq!(-&a + &a, Fq6::zero());
  }
}
