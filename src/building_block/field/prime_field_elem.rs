use crate::{
  building_block::{
    field::prime_field::PrimeField,
    to_biguint::ToBigUint,
  },
  error::Error,
};
use bitvec::{
  prelude::Lsb0,
  view::BitView,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero as NumTraitsZero};
use std::{
  cmp::{Ord, Ordering, PartialOrd},
  fmt,
  ops,
  ops::{Deref, Rem},
};

#[derive(Debug, Clone, Hash)]
pub struct PrimeFieldElem {
  pub f: PrimeField,
  pub e: BigUint,
}

impl ToBigUint for PrimeFieldElem {
  fn to_biguint(&self) -> BigUint {
    self.e.clone()
  }
}

impl PartialEq for PrimeFieldElem {
  fn eq(&self, other: &Self) -> bool {
    self.f == other.f && self.e == other.e
  }
}

impl Eq for PrimeFieldElem {}

impl Ord for PrimeFieldElem {
  fn cmp(&self, other: &Self) -> Ordering {
    self.e.cmp(&other.e)
  }
}

impl PartialOrd for PrimeFieldElem {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.e.partial_cmp(&other.e)
  }
}

impl Deref for PrimeFieldElem {
  type Target = BigUint;

  fn deref(&self) -> &Self::Target {
    &self.e
  }
}

impl fmt::Display for PrimeFieldElem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.e)
  }
}

macro_rules! impl_add {
  ($rhs: ty, $target: ty) => {
    impl<'a> ops::Add<$rhs> for $target {
      type Output = PrimeFieldElem;

      fn add(self, rhs: $rhs) -> Self::Output {
        self.plus(&rhs.to_biguint())
      }
    }
  };
}
impl_add!(u8, PrimeFieldElem);
impl_add!(u8, &PrimeFieldElem);
impl_add!(PrimeFieldElem, PrimeFieldElem);
impl_add!(PrimeFieldElem, &PrimeFieldElem);
impl_add!(&PrimeFieldElem, PrimeFieldElem);
impl_add!(&PrimeFieldElem, &PrimeFieldElem);
impl_add!(BigUint, PrimeFieldElem);

macro_rules! impl_sub {
  ($rhs: ty, $target: ty) => {
    impl<'a> ops::Sub<$rhs> for $target {
      type Output = PrimeFieldElem;

      fn sub(self, rhs: $rhs) -> Self::Output {
        self.minus(&rhs.to_biguint())
      }
    }
  };
}
impl_sub!(u8, PrimeFieldElem);
impl_sub!(u8, &PrimeFieldElem);
impl_sub!(PrimeFieldElem, PrimeFieldElem);
impl_sub!(PrimeFieldElem, &PrimeFieldElem);
impl_sub!(&PrimeFieldElem, PrimeFieldElem);
impl_sub!(&PrimeFieldElem, &PrimeFieldElem);
impl_sub!(BigUint, PrimeFieldElem);

macro_rules! impl_mul {
  ($rhs: ty, $target: ty) => {
    impl<'a> ops::Mul<$rhs> for $target {
      type Output = PrimeFieldElem;

      fn mul(self, rhs: $rhs) -> Self::Output {
        self.times(&rhs.to_biguint())
      }
    }
  };
}
impl_mul!(u8, PrimeFieldElem);
impl_mul!(u8, &PrimeFieldElem);
impl_mul!(PrimeFieldElem, PrimeFieldElem);
impl_mul!(PrimeFieldElem, &PrimeFieldElem);
impl_mul!(&PrimeFieldElem, PrimeFieldElem);
impl_mul!(&PrimeFieldElem, &PrimeFieldElem);
impl_mul!(BigUint, PrimeFieldElem);
impl_mul!(&BigUint, PrimeFieldElem);

macro_rules! impl_div {
  ($rhs: ty, $target: ty) => {
    impl<'a> ops::Div<$rhs> for $target {
      type Output = PrimeFieldElem;

      fn div(self, rhs: $rhs) -> Self::Output {
        self.divide_by(&rhs.to_biguint())
      }
    }
  };
}
impl_div!(u8, PrimeFieldElem);
impl_div!(PrimeFieldElem, PrimeFieldElem);
impl_div!(PrimeFieldElem, &PrimeFieldElem);
impl_div!(&PrimeFieldElem, PrimeFieldElem);
impl_div!(&PrimeFieldElem, &PrimeFieldElem);

impl ops::Neg for PrimeFieldElem {
  type Output = Self;

  fn neg(self) -> Self::Output {
    self.negate()
  }
}

impl<'a> ops::Neg for &'a PrimeFieldElem {
  type Output = PrimeFieldElem;

  fn neg(self) -> Self::Output {
    self.negate()
  }
}

impl PrimeFieldElem {
  pub fn new(f: &PrimeField, e: &impl ToBigUint) -> Self {
    let e = e.to_biguint();
    let f = f.clone();
    if e.ge(&f.order) {
      let e = e.rem(&f.order);
      PrimeFieldElem { f, e }
    } else {
      PrimeFieldElem { f, e }
    }
  }

  pub fn is_zero(&self) -> bool {
    self.e.is_zero()
  }

  pub fn inc(&mut self) {
    self.e = self.plus(&1u8).e;
  }

  pub fn plus(&self, rhs: &impl ToBigUint) -> PrimeFieldElem {
    let rhs = rhs.to_biguint() % &self.f.order;
    let mut e = self.e.clone();
    e += &rhs;
    if e >= self.f.order {
      e -= &self.f.order;
    }
    PrimeFieldElem { f: self.f.clone(), e }
  }

  pub fn minus(&self, rhs: &impl ToBigUint) -> PrimeFieldElem {
    let rhs = rhs.to_biguint() % &self.f.order;
    let f = self.f.clone();
    if self.e < rhs {
      let diff = &rhs - &self.e;
      let e = &self.f.order - diff;
      PrimeFieldElem { f, e }
    } else {
      let mut e = self.e.clone();
      e -= &rhs;
      PrimeFieldElem { f, e }
    }
  }

  pub fn times(&self, rhs: &impl ToBigUint) -> PrimeFieldElem {
    let rhs = rhs.to_biguint() % &self.f.order;
    let mut e = self.e.clone();
    e *= &rhs;
    e %= &self.f.order;
    PrimeFieldElem { f: self.f.clone(), e }
  }

  // square-and-multiply over the LSB-first bits of the exponent
  pub fn pow(&self, rhs: &impl ToBigUint) -> PrimeFieldElem {
    let rhs = rhs.to_biguint();
    let rhs_le_bytes = rhs.to_bytes_le();

    let mut sum = BigUint::one();
    let mut bit_value = self.e.clone();
    let rhs_in_bits = rhs_le_bytes.view_bits::<Lsb0>();

    for bit in rhs_in_bits {
      if bit == true {
        sum *= &bit_value;
      }
      bit_value = (&bit_value * &bit_value) % &self.f.order;
      sum %= &self.f.order;
    }

    PrimeFieldElem { f: self.f.clone(), e: sum }
  }

  pub fn sq(&self) -> PrimeFieldElem {
    let mut e = self.e.clone();
    e *= &self.e;
    e %= &self.f.order;
    PrimeFieldElem { f: self.f.clone(), e }
  }

  pub fn cube(&self) -> PrimeFieldElem {
    let mut e = self.e.clone();
    e *= &self.e;
    e %= &self.f.order;
    e *= &self.e;
    e %= &self.f.order;
    PrimeFieldElem { f: self.f.clone(), e }
  }

  // extended Euclidean algorithm; Bezout coefficients go negative,
  // so they are tracked as BigInt
  pub fn safe_inv(&self) -> Result<PrimeFieldElem, Error> {
    if self.e.is_zero() {
      return Err(Error::ArithmeticFailure(
        "cannot invert zero".to_string(),
      ));
    }
    let order = BigInt::from_biguint(Sign::Plus, self.f.order.clone());

    let mut r0 = BigInt::from_biguint(Sign::Plus, self.e.clone());
    let mut r1 = order.clone();
    let mut s0 = BigInt::one();
    let mut s1 = BigInt::zero();

    while !r1.is_zero() {
      let q = &r0 / &r1;
      let r2 = &r0 % &r1;
      let s2 = &s0 - &s1 * &q;

      r0 = r1;
      r1 = r2;
      s0 = s1;
      s1 = s2;
    }

    // r0 = gcd = 1; s0 is the inverse up to sign
    let mut inv = s0 % &order;
    if inv.sign() == Sign::Minus {
      inv += &order;
    }
    let e = inv.to_biguint().unwrap();
    Ok(PrimeFieldElem { f: self.f.clone(), e })
  }

  pub fn inv(&self) -> PrimeFieldElem {
    self.safe_inv().unwrap()
  }

  pub fn safe_div(&self, rhs: &impl ToBigUint) -> Result<PrimeFieldElem, Error> {
    let rhs = rhs.to_biguint() % &self.f.order;
    let inv = self.f.elem(&rhs).safe_inv()?;
    Ok(self.times(&inv))
  }

  pub fn divide_by(&self, rhs: &impl ToBigUint) -> PrimeFieldElem {
    self.safe_div(rhs).unwrap()
  }

  pub fn negate(&self) -> PrimeFieldElem {
    let f = self.f.clone();
    if self.e.is_zero() {
      PrimeFieldElem { f, e: self.e.clone() }
    } else {
      let mut e = self.f.order.clone();
      e -= &self.e;
      PrimeFieldElem { f, e }
    }
  }
}
