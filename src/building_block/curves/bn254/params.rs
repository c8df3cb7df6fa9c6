use crate::building_block::{
  curves::bn254::{
    fq1::Fq1,
    fq2::Fq2,
  },
  field::prime_field::PrimeField,
};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub struct Params();

static BASE_PRIME_FIELD: Lazy<Arc<PrimeField>> = Lazy::new(|| {
  let q = BigUint::parse_bytes(
    b"21888242871839275222246405745257275088696311157297823662689037894645226208583",
    10,
  ).unwrap();
  Arc::new(PrimeField::new(&q))
});

static SUBGROUP: Lazy<Arc<PrimeField>> = Lazy::new(|| {
  // order of the base point
  let r = BigUint::parse_bytes(
    b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
    10,
  ).unwrap();
  Arc::new(PrimeField::new(&r))
});

// BN seed
static U: Lazy<BigUint> = Lazy::new(|| {
  BigUint::from(4965661367192848881u64)
});

// optimal-ate Miller loop runs over the bits of 6u + 2
static ATE_LOOP_COUNT: Lazy<BigUint> = Lazy::new(|| {
  &*U * 6u8 + 2u8
});

// the sextic twist is built on the non-residue xi = 9 + u
static XI: Lazy<Fq2> = Lazy::new(|| {
  let f = Params::base_prime_field();
  Fq2::new(&f.elem(&1u8), &f.elem(&9u8))
});

// b' = 3 / xi, the D-type twist of y^2 = x^3 + 3
static TWIST_COEFF_B: Lazy<Fq2> = Lazy::new(|| {
  let f = Params::base_prime_field();
  let three = Fq2::new(&f.elem(&0u8), &f.elem(&3u8));
  three * XI.inv()
});

static TWO_INV: Lazy<Fq1> = Lazy::new(|| {
  let f = Params::base_prime_field();
  f.elem(&2u8).inv()
});

// gamma[p-1][i-1] = xi^(i * (q^p - 1) / 6); multipliers applied to the
// w^i coefficient of an Fq12 element by the Frobenius endomorphism pi^p
static FROBENIUS_GAMMAS: Lazy<Vec<Vec<Fq2>>> = Lazy::new(|| {
  let q = Params::base_prime_field().order.clone();
  let mut gammas = vec![];
  for p in 1u32..=3 {
    let exp_base = (q.pow(p) - 1u8) / 6u8;
    let mut row = vec![];
    for i in 1u8..=5 {
      let exp = &exp_base * i;
      row.push(XI.pow(&exp));
    }
    gammas.push(row);
  }
  gammas
});

// xi^((q-1)/3) and xi^((q-1)/2); untwist-Frobenius-twist constants for
// the pairing's pi(Q) and pi^2(Q) tail steps
static TWIST_MUL_BY_Q_X: Lazy<Fq2> = Lazy::new(|| {
  let q = Params::base_prime_field().order.clone();
  XI.pow(&((q - 1u8) / 3u8))
});

static TWIST_MUL_BY_Q_Y: Lazy<Fq2> = Lazy::new(|| {
  let q = Params::base_prime_field().order.clone();
  XI.pow(&((q - 1u8) / 2u8))
});

impl Params {
  pub fn base_prime_field() -> Arc<PrimeField> {
    BASE_PRIME_FIELD.clone()
  }

  pub fn subgroup() -> Arc<PrimeField> {
    SUBGROUP.clone()
  }

  pub fn seed() -> BigUint {
    U.clone()
  }

  pub fn ate_loop_count() -> BigUint {
    ATE_LOOP_COUNT.clone()
  }

  pub fn xi() -> Fq2 {
    XI.clone()
  }

  pub fn twist_coeff_b() -> Fq2 {
    TWIST_COEFF_B.clone()
  }

  pub fn two_inv() -> Fq1 {
    TWO_INV.clone()
  }

  pub fn frobenius_gamma(power: usize, i: usize) -> Fq2 {
    FROBENIUS_GAMMAS[power - 1][i - 1].clone()
  }

  pub fn twist_mul_by_q_x() -> Fq2 {
    TWIST_MUL_BY_Q_X.clone()
  }

  pub fn twist_mul_by_q_y() -> Fq2 {
    TWIST_MUL_BY_Q_Y.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ate_loop_count_is_6u_plus_2() {
    let exp = BigUint::parse_bytes(b"29793968203157093288", 10).unwrap();
    assert_eq!(Params::ate_loop_count(), exp);
  }

  #[test]
  fn twist_coeff_b_times_xi_is_3() {
    let f = Params::base_prime_field();
    let three = Fq2::new(&f.elem(&0u8), &f.elem(&3u8));
    assert_eq!(Params::twist_coeff_b() * Params::xi(), three);
  }

  #[test]
  fn frobenius_gamma_matches_direct_power() {
    let q = Params::base_prime_field().order.clone();
    let exp = (&q.pow(2u32) - 1u8) / 6u8 * 3u8;
    assert_eq!(Params::frobenius_gamma(2, 3), Params::xi().pow(&exp));
  }
}
