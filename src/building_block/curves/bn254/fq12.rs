use crate::building_block::{
  curves::bn254::{
    fq2::Fq2,
    fq6::Fq6,
    params::Params,
  },
  zero::Zero,
};
use num_bigint::BigUint;
use std::{
  fmt,
  ops::{Add, Mul, Neg, Sub},
};

// w0 + w1*w with w^2 = v
#[derive(Debug, Clone)]
pub struct Fq12 {
  pub w1: Fq6,
  pub w0: Fq6,
}

impl Fq12 {
  pub fn new(w1: &Fq6, w0: &Fq6) -> Self {
    Fq12 {
      w1: w1.clone(),
      w0: w0.clone(),
    }
  }

  pub fn one() -> Self {
    Fq12 {
      w1: Fq6::zero(),
      w0: Fq6::one(),
    }
  }

  pub fn inv(&self) -> Self {
    // 1/(a + bw) = (a - bw)/(a^2 - v b^2)
    let factor = (&self.w0 * &self.w0 - (&self.w1 * &self.w1).mul_by_v()).inv();
    Self {
      w1: (-&self.w1) * &factor,
      w0: &self.w0 * &factor,
    }
  }

  pub fn sq(&self) -> Self {
    self * self
  }

  // unitary inverse; equals inv() for elements of norm 1
  pub fn conj(&self) -> Self {
    Self {
      w1: -&self.w1,
      w0: self.w0.clone(),
    }
  }

  pub fn pow(&self, e: &BigUint) -> Self {
    let mut res = Fq12::one();
    for i in (0..e.bits()).rev() {
      res = res.sq();
      if e.bit(i) {
        res = &res * self;
      }
    }
    res
  }

  // coefficients in the w-power basis: f = sum g_i * w^i with w^6 = xi
  fn to_w_coeffs(&self) -> [Fq2; 6] {
    [
      self.w0.v0.clone(),
      self.w1.v0.clone(),
      self.w0.v1.clone(),
      self.w1.v1.clone(),
      self.w0.v2.clone(),
      self.w1.v2.clone(),
    ]
  }

  fn from_w_coeffs(gs: &[Fq2; 6]) -> Self {
    Fq12 {
      w1: Fq6::new(&gs[5], &gs[3], &gs[1]),
      w0: Fq6::new(&gs[4], &gs[2], &gs[0]),
    }
  }

  // pi^power for power in 1..=3; conjugates each Fq2 coefficient on odd
  // powers and multiplies the w^i coefficient by xi^(i(q^power - 1)/6)
  pub fn frobenius(&self, power: usize) -> Self {
    let gs = self.to_w_coeffs();
    let mut out: Vec<Fq2> = vec![];
    for (i, g) in gs.iter().enumerate() {
      let mut gi = if power % 2 == 1 { g.conj() } else { g.clone() };
      if i > 0 {
        gi = gi * Params::frobenius_gamma(power, i);
      }
      out.push(gi);
    }
    let out: [Fq2; 6] = [
      out[0].clone(), out[1].clone(), out[2].clone(),
      out[3].clone(), out[4].clone(), out[5].clone(),
    ];
    Fq12::from_w_coeffs(&out)
  }
}

impl Zero<Fq12> for Fq12 {
  fn zero() -> Self {
    Self {
      w1: Fq6::zero(),
      w0: Fq6::zero(),
    }
  }

  fn is_zero(&self) -> bool {
    self.w1.is_zero() && self.w0.is_zero()
  }
}

impl PartialEq for Fq12 {
  fn eq(&self, other: &Self) -> bool {
    self.w1 == other.w1 && self.w0 == other.w0
  }
}

impl Eq for Fq12 {}

impl fmt::Display for Fq12 {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}\n{}", self.w0, self.w1)
  }
}

macro_rules! impl_neg {
  ($target: ty) => {
    impl Neg for $target {
      type Output = Fq12;

      fn neg(self) -> Self::Output {
        Fq12::zero() - self
      }
    }
  };
}
impl_neg!(Fq12);
impl_neg!(&Fq12);

macro_rules! impl_add {
  ($rhs: ty, $target: ty) => {
    impl Add<$rhs> for $target {
      type Output = Fq12;

      fn add(self, rhs: $rhs) -> Self::Output {
        Fq12 {
          w1: &self.w1 + &rhs.w1,
          w0: &self.w0 + &rhs.w0,
        }
      }
    }
  };
}
impl_add!(Fq12, Fq12);
impl_add!(Fq12, &Fq12);
impl_add!(&Fq12, Fq12);
impl_add!(&Fq12, &Fq12);

macro_rules! impl_sub {
  ($rhs: ty, $target: ty) => {
    impl Sub<$rhs> for $target {
      type Output = Fq12;

      fn sub(self, rhs: $rhs) -> Self::Output {
        Fq12 {
          w1: &self.w1 - &rhs.w1,
          w0: &self.w0 - &rhs.w0,
        }
      }
    }
  };
}
impl_sub!(Fq12, Fq12);
impl_sub!(Fq12, &Fq12);
impl_sub!(&Fq12, Fq12);
impl_sub!(&Fq12, &Fq12);

macro_rules! impl_mul {
  ($rhs: ty, $target: ty) => {
    impl Mul<$rhs> for $target {
      type Output = Fq12;

      fn mul(self, rhs: $rhs) -> Self::Output {
        // (a0 + a1 w)(b0 + b1 w) = (a0 b0 + v a1 b1) + (a0 b1 + a1 b0) w
        Fq12 {
          w1: &self.w0 * &rhs.w1 + &self.w1 * &rhs.w0,
          w0: &self.w0 * &rhs.w0 + (&self.w1 * &rhs.w1).mul_by_v(),
        }
      }
    }
  };
}
impl_mul!(Fq12, Fq12);
impl_mul!(Fq12, &Fq12);
impl_mul!(&Fq12, Fq12);
impl_mul!(&Fq12, &Fq12);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::building_block::curves::bn254::fq1::Fq1;

  fn sample() -> Fq12 {
    let f = Fq1::base_field();
    let mut cs = vec![];
    for i in 1u8..=12 {
      cs.push(f.elem(&i));
    }
    let v0 = Fq2::new(&cs[0], &cs[1]);
    let v1 = Fq2::new(&cs[2], &cs[3]);
    let v2 = Fq2::new(&cs[4], &cs[5]);
    let v3 = Fq2::new(&cs[6], &cs[7]);
    let v4 = Fq2::new(&cs[8], &cs[9]);
    let v5 = Fq2::new(&cs[10], &cs[11]);
    Fq12::new(
      &Fq6::new(&v0, &v1, &v2),
      &Fq6::new(&v3, &v4, &v5),
    )
  }

  #[test]
  fn mul_by_one_is_identity() {
    let a = sample();
    assert_eq!(&a * Fq12::one(), a);
  }

  #[test]
  fn inv_cancels() {
    let a = sample();
    assert_eq!(&a * a.inv(), Fq12::one());
  }

  #[test]
  fn pow_small_exponents() {
    let a = sample();
    assert_eq!(a.pow(&BigUint::from(0u8)), Fq12::one());
    assert_eq!(a.pow(&BigUint::from(1u8)), a);
    assert_eq!(a.pow(&BigUint::from(3u8)), &a.sq() * &a);
  }

  #[test]
  fn w_coeffs_roundtrip() {
    let a = sample();
    assert_eq!(Fq12::from_w_coeffs(&a.to_w_coeffs()), a);
  }

  // pi^p must be multiplicative and agree with raising to the q^p power
  #[test]
  fn frobenius_is_multiplicative() {
    let a = sample();
    let b = &a * &a.conj();
    for p in 1..=3 {
      let lhs = (&a * &b).frobenius(p);
      let rhs = a.frobenius(p) * b.frobenius(p);
      assert_eq!(lhs, rhs);
    }
  }

  #[test]
  fn frobenius_matches_q_power() {
    let a = sample();
    let q = Fq1::base_field().order.clone();
    assert_eq!(a.frobenius(1), a.pow(&q));
    assert_eq!(a.frobenius(2), a.pow(&(&q * &q)));
  }

  #[test]
  fn frobenius_composes() {
    let a = sample();
    assert_eq!(a.frobenius(1).frobenius(1), a.frobenius(2));
    assert_eq!(a.frobenius(2).frobenius(1), a.frobenius(3));
  }
}
