use crate::building_block::{
  curves::bn254::{
    fq1::Fq1,
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

// Jacobian coordinates over Fq; (X, Y, Z) represents the affine point
// (X/Z^2, Y/Z^3) and any triple with Z = 0 is the point at infinity
#[derive(Debug, Clone)]
pub struct G1Point {
  pub x: Fq1,
  pub y: Fq1,
  pub z: Fq1,
}

impl G1Point {
  pub fn new(x: &Fq1, y: &Fq1, z: &Fq1) -> Self {
    G1Point {
      x: x.clone(),
      y: y.clone(),
      z: z.clone(),
    }
  }

  pub fn from_affine(x: &Fq1, y: &Fq1) -> Self {
    G1Point {
      x: x.clone(),
      y: y.clone(),
      z: Fq1::fq1_one(),
    }
  }

  pub fn base_field() -> Arc<PrimeField> {
    Params::base_prime_field()
  }

  // order of the base point; the scalars that multiply curve points
  pub fn curve_group() -> Arc<PrimeField> {
    Params::subgroup()
  }

  pub fn g() -> Self {
    let f = G1Point::base_field();
    G1Point::from_affine(&f.elem(&1u8), &f.elem(&2u8))
  }

  pub fn point_at_infinity() -> Self {
    G1Point {
      x: Fq1::fq1_zero(),
      y: Fq1::fq1_one(),
      z: Fq1::fq1_zero(),
    }
  }

  pub fn get_random_point(rand: &mut RandomNumber) -> Self {
    let r = G1Point::curve_group().rand_elem(rand, true).unwrap();
    &G1Point::g() * &r
  }

  // http://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#doubling-dbl-2009-l
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
    G1Point::new(&x3, &y3, &z3)
  }

  // https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-3.html#addition-add-2007-bl
  fn plus(&self, rhs: &G1Point) -> G1Point {
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
      // vertical line through the two points
      return G1Point::point_at_infinity();
    }

    let h = &u2 - &u1;
    let i = (&h * 2u8).sq();
    let j = &h * &i;
    let r = (&s2 - &s1) * 2u8;
    let v = &u1 * &i;
    let x3 = r.sq() - &j - (&v * 2u8);
    let y3 = &r * (&v - &x3) - ((&s1 * &j) * 2u8);
    let z3 = ((&self.z + &rhs.z).sq() - &z1z1 - &z2z2) * &h;
    G1Point::new(&x3, &y3, &z3)
  }

  // left-to-right double-and-add; variable-time
  fn scalar_mul(&self, n: &BigUint) -> G1Point {
    let mut res = G1Point::point_at_infinity();
    for i in (0..n.bits()).rev() {
      res = res.double();
      if n.bit(i) {
        res = res.plus(self);
      }
    }
    res
  }

  pub fn negate(&self) -> Self {
    G1Point::new(&self.x, &self.y.negate(), &self.z)
  }

  // one inversion; infinity normalizes to the canonical (0, 1, 0)
  pub fn to_affine(&self) -> Self {
    if self.is_zero() {
      return G1Point::point_at_infinity();
    }
    let z_inv = self.z.inv();
    let z_inv_sq = z_inv.sq();
    G1Point {
      x: &self.x * &z_inv_sq,
      y: &self.y * (&z_inv_sq * &z_inv),
      z: Fq1::fq1_one(),
    }
  }

  // Y^2 Z^0 = X^3 + 3 Z^6 in Jacobian form
  pub fn is_on_curve(&self) -> bool {
    if self.is_zero() {
      return true;
    }
    let lhs = self.y.sq();
    let rhs = self.x.cube() + self.z.sq().cube() * 3u8;
    lhs == rhs
  }
}

impl Zero<G1Point> for G1Point {
  fn zero() -> G1Point {
    G1Point::point_at_infinity()
  }

  fn is_zero(&self) -> bool {
    self.z.is_zero()
  }
}

// cross-multiplied Jacobian comparison; same relation as comparing
// affine coordinates without performing the inversion
impl PartialEq for G1Point {
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

impl Eq for G1Point {}

impl fmt::Display for G1Point {
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
      type Output = G1Point;

      fn add(self, rhs: $rhs) -> Self::Output {
        self.plus(&rhs)
      }
    }
  };
}
impl_add!(G1Point, G1Point);
impl_add!(G1Point, &G1Point);
impl_add!(&G1Point, G1Point);
impl_add!(&G1Point, &G1Point);

impl AddAssign<&G1Point> for G1Point {
  fn add_assign(&mut self, rhs: &G1Point) {
    *self = self.plus(rhs);
  }
}

impl AddAssign<G1Point> for G1Point {
  fn add_assign(&mut self, rhs: G1Point) {
    *self = self.plus(&rhs);
  }
}

macro_rules! impl_neg {
  ($target: ty) => {
    impl Neg for $target {
      type Output = G1Point;

      fn neg(self) -> Self::Output {
        self.negate()
      }
    }
  };
}
impl_neg!(G1Point);
impl_neg!(&G1Point);

macro_rules! impl_scalar_mul {
  ($rhs: ty, $target: ty) => {
    impl Mul<$rhs> for $target {
      type Output = G1Point;

      fn mul(self, rhs: $rhs) -> Self::Output {
        self.scalar_mul(&rhs.e)
      }
    }
  };
}
impl_scalar_mul!(PrimeFieldElem, G1Point);
impl_scalar_mul!(&PrimeFieldElem, G1Point);
impl_scalar_mul!(PrimeFieldElem, &G1Point);
impl_scalar_mul!(&PrimeFieldElem, &G1Point);
