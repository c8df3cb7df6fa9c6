use crate::building_block::{
  curves::bn254::{
    fq2::Fq2,
    params::Params,
  },
  field::{
    prime_field::PrimeField,
    prime_field_elem::PrimeFieldElem,
  },
  random_number::RandomNumber,
  zero::Zero,
};
use num_bigint::BigUint;
use std::{
  fmt,
  ops::{Add, AddAssign, Mul, Neg},
  sync::Arc,
};

// Jacobian coordinates over Fq2; the twist curve is y^2 = x^3 + 3/xi
#[derive(Debug, Clone)]
pub struct G2Point {
  pub x: Fq2,
  pub y: Fq2,
  pub z: Fq2,
}

impl G2Point {
  pub fn new(x: &Fq2, y: &Fq2, z: &Fq2) -> Self {
    G2Point {
      x: x.clone(),
      y: y.clone(),
      z: z.clone(),
    }
  }

  pub fn from_affine(x: &Fq2, y: &Fq2) -> Self {
    G2Point {
      x: x.clone(),
      y: y.clone(),
      z: Fq2::one(),
    }
  }

  pub fn base_field() -> Arc<PrimeField> {
    Params::base_prime_field()
  }

  pub fn curve_group() -> Arc<PrimeField> {
    Params::subgroup()
  }

  pub fn g() -> Self {
    let f = G2Point::base_field();
    let x1 = f.elem(&BigUint::parse_bytes(
      b"11559732032986387107991004021392285783925812861821192530917403151452391805634",
      10,
    ).unwrap());
    let x0 = f.elem(&BigUint::parse_bytes(
      b"10857046999023057135944570762232829481370756359578518086990519993285655852781",
      10,
    ).unwrap());
    let y1 = f.elem(&BigUint::parse_bytes(
      b"4082367875863433681332203403145435568316851327593401208105741076214120093531",
      10,
    ).unwrap());
    let y0 = f.elem(&BigUint::parse_bytes(
      b"8495653923123431417604973247489272438418190587263600148770280649306958101930",
      10,
    ).unwrap());
    G2Point::from_affine(&Fq2::new(&x1, &x0), &Fq2::new(&y1, &y0))
  }

  pub fn point_at_infinity() -> Self {
    G2Point {
      x: Fq2::zero(),
      y: Fq2::one(),
      z: Fq2::zero(),
    }
  }

  pub fn get_random_point(rand: &mut RandomNumber) -> Self {
    let r = G2Point::curve_group().rand_elem(rand, true).unwrap();
    &G2Point::g() * &r
  }

  // dbl-2009-l over Fq2
  pub fn double(&self) -> Self {
    if self.is_zero() {
      return self.clone();
    }
    let a = self.x.sq();
    let b = self.y.sq();
    let c = b.sq();
    let d = ((&self.x + &b).sq() - &a - &c) * 2u8;
    let e = &a * 3u8;
    let f = e.sq();
    let x3 = &f - (&d * 2u8);
    let y3 = &e * (&d - &x3) - (&c * 8u8);
    let z3 = (&self.y * &self.z) * 2u8;
    G2Point::new(&x3, &y3, &z3)
  }

  // add-2007-bl over Fq2
  fn plus(&self, rhs: &G2Point) -> G2Point {
    if self.is_zero() {
      return rhs.clone();
    }
    if rhs.is_zero() {
      return self.clone();
    }

    let z1z1 = self.z.sq();
    let z2z2 = rhs.z.sq();
    let u1 = &self.x * &z2z2;
    let u2 = &rhs.x * &z1z1;
    let s1 = &self.y * &rhs.z * &z2z2;
    let s2 = &rhs.y * &self.z * &z1z1;

    if u1 == u2 {
      if s1 == s2 {
        return self.double();
      }
      return G2Point::point_at_infinity();
    }

    let h = &u2 - &u1;
    let i = (&h * 2u8).sq();
    let j = &h * &i;
    let r = (&s2 - &s1) * 2u8;
    let v = &u1 * &i;
    let x3 = r.sq() - &j - (&v * 2u8);
    let y3 = &r * (&v - &x3) - ((&s1 * &j) * 2u8);
    let z3 = ((&self.z + &rhs.z).sq() - &z1z1 - &z2z2) * &h;
    G2Point::new(&x3, &y3, &z3)
  }

  fn scalar_mul(&self, n: &BigUint) -> G2Point {
    let mut res = G2Point::point_at_infinity();
    for i in (0..n.bits()).rev() {
      res = res.double();
      if n.bit(i) {
        res = res.plus(self);
      }
    }
    res
  }

  pub fn negate(&self) -> Self {
    G2Point::new(&self.x, &-&self.y, &self.z)
  }

  pub fn to_affine(&self) -> Self {
    if self.is_zero() {
      return G2Point::point_at_infinity();
    }
    let z_inv = self.z.inv();
    let z_inv_sq = z_inv.sq();
    G2Point {
      x: &self.x * &z_inv_sq,
      y: &self.y * (&z_inv_sq * &z_inv),
      z: Fq2::one(),
    }
  }

  // Y^2 = X^3 + b' Z^6 with b' = 3/xi
  pub fn is_on_curve(&self) -> bool {
    if self.is_zero() {
      return true;
    }
    let lhs = self.y.sq();
    let z6 = self.z.sq().sq() * self.z.sq();
    let rhs = &self.x.sq() * &self.x + z6 * Params::twist_coeff_b();
    lhs == rhs
  }
}

impl Zero<G2Point> for G2Point {
  fn zero() -> G2Point {
    G2Point::point_at_infinity()
  }

  fn is_zero(&self) -> bool {
    self.z.is_zero()
  }
}

impl PartialEq for G2Point {
  fn eq(&self, other: &Self) -> bool {
    if self.is_zero() || other.is_zero() {
      return self.is_zero() && other.is_zero();
    }
    let z1z1 = self.z.sq();
    let z2z2 = other.z.sq();
    if &self.x * &z2z2 != &other.x * &z1z1 {
      return false;
    }
    &self.y * (&z2z2 * &other.z) == &other.y * (&z1z1 * &self.z)
  }
}

impl Eq for G2Point {}

impl fmt::Display for G2Point {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
    if self.is_zero() {
      write!(f, "inf")
    } else {
      let p = self.to_affine();
      write!(f, "({}, {})", p.x, p.y)
    }
  }
}

macro_rules! impl_add {
  ($rhs: ty, $target: ty) => {
    impl Add<$rhs> for $target {
      type Output = G2Point;

      fn add(self, rhs: $rhs) -> Self::Output {
        self.plus(&rhs)
      }
    }
  };
}
impl_add!(G2Point, G2Point);
impl_add!(G2Point, &G2Point);
impl_add!(&G2Point, G2Point);
impl_add!(&G2Point, &G2Point);

impl AddAssign<&G2Point> for G2Point {
  fn add_assign(&mut self, rhs: &G2Point) {
    *self = self.plus(rhs);
  }
}

impl AddAssign<G2Point> for G2Point {
  fn add_assign(&mut self, rhs: G2Point) {
    *self = self.plus(&rhs);
  }
}

macro_rules! impl_neg {
  ($target: ty) => {
    impl Neg for $target {
      type Output = G2Point;

      fn neg(self) -> Self::Output {
        self.negate()
      }
    }
  };
}
impl_neg!(G2Point);
impl_neg!(&G2Point);

macro_rules! impl_scalar_mul {
  ($rhs: ty, $target: ty) => {
    impl Mul<$rhs> for $target {
      type Output = G2Point;

      fn mul(self, rhs: $rhs) -> Self::Output {
        self.scalar_mul(&rhs.e)
      }
    }
  };
}
impl_scalar_mul!(PrimeFieldElem, G2Point);
impl_scalar_mul!(&PrimeFieldElem, G2Point);
impl_scalar_mul!(PrimeFieldElem, &G2Point);
impl_scalar_mul!(&PrimeFieldElem, &G2Point);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generator_is_on_twist_curve() {
    assert!(G2Point::g().is_on_curve());
  }

  #[test]
  fn add_then_negate_returns_to_infinity() {
    let g = G2Point::g();
    assert!((&g + g.negate()).is_zero());
  }

  #[test]
  fn adding_infinity_returns_other_operand() {
    let g = G2Point::g();
    let inf = G2Point::point_at_infinity();
    assert_eq!(&g + &inf, g);
    assert_eq!(&inf + &g, g);
  }

  #[test]
  fn double_matches_self_addition() {
    let g = G2Point::g();
    assert_eq!(g.double(), &g + &g);
    assert!(g.double().is_on_curve());
  }

  #[test]
  fn scalar_mul_distributes() {
    let f = G2Point::curve_group();
    let mut rand = RandomNumber::from_seed(21);
    let g = G2Point::g();
    let a = f.rand_elem(&mut rand, true).unwrap();
    let b = f.rand_elem(&mut rand, true).unwrap();
    assert_eq!(&g * (&a + &b), (&g * &a) + (&g * &b));
  }

  #[test]
  fn subgroup_order_annihilates_generator() {
    let r = G2Point::curve_group().order.clone();
    assert!(G2Point::g().scalar_mul(&r).is_zero());
  }

  #[test]
  fn affine_roundtrip_preserves_point() {
    let f = G2Point::curve_group();
    let p = &G2Point::g() * &f.elem(&98765u32);
    let affine = p.to_affine();
    assert_eq!(affine.z, Fq2::one());
    assert_eq!(affine, p);
    assert!(affine.is_on_curve());
  }
}
