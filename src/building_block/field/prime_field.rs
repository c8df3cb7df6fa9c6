use crate::{
  building_block::{
    field::prime_field_elem::PrimeFieldElem,
    random_number::RandomNumber,
    to_bigint::ToBigInt as ToBigIntType,
    to_biguint::ToBigUint,
  },
  error::Error,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use rand::RngCore;

// give up if this many consecutive samples land outside [0, order)
const MAX_SAMPLING_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, Hash)]
pub struct PrimeField {
  pub order: BigUint,
}

impl PrimeField {
  pub fn new(order: &impl ToBigUint) -> Self {
    PrimeField {
      order: order.to_biguint(),
    }
  }

  pub fn order_ref(&self) -> &BigUint {
    &self.order
  }

  pub fn elem(&self, x: &impl ToBigUint) -> PrimeFieldElem {
    PrimeFieldElem::new(self, x)
  }

  pub fn elem_from_signed(&self, x: &impl ToBigIntType) -> PrimeFieldElem {
    let n = x.to_bigint();
    if n.sign() == Sign::Minus {
      let order = &BigInt::from_biguint(Sign::Plus, self.order.clone());
      let mut n = -n;
      n = n % order;
      n = order - n;
      let n = n.to_biguint().unwrap();
      PrimeFieldElem::new(self, &n)
    } else {
      let n = n.to_biguint().unwrap();
      PrimeFieldElem::new(self, &n)
    }
  }

  // uniform element of [0, order) or [1, order); values >= order are
  // rejected rather than reduced so the distribution stays uniform
  pub fn rand_elem(
    &self,
    rand: &mut RandomNumber,
    exclude_zero: bool,
  ) -> Result<PrimeFieldElem, Error> {
    let bits = self.order.bits();
    let buf_size = ((bits + 7) / 8) as usize;
    let excess_bits = (buf_size as u64) * 8 - bits;
    let mut buf = vec![0u8; buf_size];

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
      rand.gen.fill_bytes(&mut buf);
      buf[0] &= 0xffu8 >> excess_bits;
      let x = BigUint::from_bytes_be(&buf);
      if x >= self.order {
        continue;
      }
      if exclude_zero && x.is_zero() {
        continue;
      }
      return Ok(PrimeFieldElem {
        f: self.clone(),
        e: x,
      });
    }
    Err(Error::ArithmeticFailure(format!(
      "gave up sampling a field element after {} attempts",
      MAX_SAMPLING_ATTEMPTS,
    )))
  }
}

impl PartialEq for PrimeField {
  fn eq(&self, other: &Self) -> bool {
    self.order == other.order
  }
}

impl Eq for PrimeField {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_below_order() {
    let f = PrimeField::new(&11u8);
    let a = f.elem(&7u8);
    assert_eq!(a.e, BigUint::from(7u8));
  }

  #[test]
  fn new_above_order() {
    let f = PrimeField::new(&11u8);
    let a = f.elem(&13u8);
    assert_eq!(a.e, BigUint::from(2u8));
  }

  #[test]
  fn elem_from_pos_signed_int() {
    let f = PrimeField::new(&11u8);
    let a = f.elem_from_signed(&7);
    assert_eq!(a.e, BigUint::from(7u8));
  }

  #[test]
  fn elem_from_neg_signed_int() {
    let f = PrimeField::new(&11u8);
    let a = f.elem_from_signed(&-7);
    assert_eq!(a.e, BigUint::from(4u8));
  }

  #[test]
  fn rand_elem_is_in_range() {
    let f = PrimeField::new(&11u8);
    let mut rand = RandomNumber::new();
    for _ in 0..100 {
      let a = f.rand_elem(&mut rand, true).unwrap();
      assert!(!a.e.is_zero());
      assert!(a.e < f.order);
    }
  }

  #[test]
  fn rand_elem_reproducible_under_fixed_seed() {
    let f = PrimeField::new(&3911u16);
    let mut r1 = RandomNumber::from_seed(42);
    let mut r2 = RandomNumber::from_seed(42);
    for _ in 0..10 {
      let a = f.rand_elem(&mut r1, false).unwrap();
      let b = f.rand_elem(&mut r2, false).unwrap();
      assert_eq!(a, b);
    }
  }
}
