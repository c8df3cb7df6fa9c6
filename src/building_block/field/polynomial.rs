use crate::{
  building_block::{
    curves::bn254::g1_point::G1Point,
    field::{
      prime_field::PrimeField,
      prime_field_elem::PrimeFieldElem,
    },
  },
  error::Error,
};
use num_bigint::BigUint;
use num_traits::{One, Zero as NumTraitZero};
use std::{
  fmt::{Debug, Formatter},
  ops::{Add, AddAssign, Deref, Mul, MulAssign, Sub},
};

#[derive(Clone)]
pub struct Polynomial {
  pub f: PrimeField,
  pub coeffs: Vec<PrimeFieldElem>,  // e.g. 2x^3 + 5x + 9 -> [9, 5, 0, 2]
  _private: (),  // to force using new()
}

impl Deref for Polynomial {
  type Target = Vec<PrimeFieldElem>;

  fn deref(&self) -> &Self::Target {
    &self.coeffs
  }
}

impl PartialEq<Polynomial> for Polynomial {
  fn eq(&self, rhs: &Polynomial) -> bool {
    if self.coeffs.len() != rhs.coeffs.len() {
      return false;
    }
    for i in 0..self.coeffs.len() {
      if self.coeffs[i] != rhs.coeffs[i] {
        return false;
      }
    }
    true
  }
}

impl Debug for Polynomial {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    let zero = BigUint::zero();
    let one = BigUint::one();

    let mut terms = vec![];
    let last_idx = self.coeffs.len() - 1;

    for (i, coeff) in self.coeffs.iter().rev().enumerate() {
      if coeff.e != zero {
        let mut s = String::new();
        if coeff.e != one || i == last_idx {
          s.push_str(&format!("{:?}", coeff.e));
        }
        if i < last_idx {
          s.push_str("x");
          if i < last_idx - 1 {
            s.push_str(&format!("^{}", last_idx - i));
          }
        }
        terms.push(s);
      }
    }
    if terms.is_empty() {
      terms.push("0".to_string());
    }
    write!(f, "{}", terms.join(" + "))
  }
}

#[derive(Debug)]
pub enum DivResult {
  Quotient(Polynomial),
  QuotientRemainder((Polynomial, Polynomial)),
}

impl Polynomial {
  pub fn new(f: &PrimeField, coeffs: &Vec<PrimeFieldElem>) -> Self {
    if coeffs.len() == 0 { panic!("coeffs is empty"); }
    let x = Polynomial {
      f: f.clone(),
      coeffs: coeffs.clone(),
      _private: (),
    };
    x.normalize()
  }

  pub fn zero(f: &PrimeField) -> Self {
    let coeffs = &vec![f.elem(&0u8)];
    Polynomial::new(f, coeffs)
  }

  pub fn is_zero(&self) -> bool {
    self.coeffs.len() == 1 && self.coeffs[0].is_zero()
  }

  pub fn degree(&self) -> usize {
    self.coeffs.len() - 1
  }

  // trim trailing zero-coeff terms, always keeping the 0th entry
  fn normalize(&self) -> Polynomial {
    let mut new_len = self.coeffs.len();
    for i in 0..(self.coeffs.len() - 1) {
      let coeff = &self.coeffs[self.coeffs.len() - 1 - i];
      if !coeff.is_zero() { break; }
      new_len -= 1;
    }

    let mut norm_coeffs = vec![];
    for coeff in &self.coeffs[0..new_len] {
      norm_coeffs.push(coeff.clone());
    }
    Polynomial { f: self.f.clone(), coeffs: norm_coeffs, _private: () }
  }

  pub fn plus(&self, rhs: &Polynomial) -> Polynomial {
    let (smaller, larger) = if self.coeffs.len() < rhs.coeffs.len() {
      (&self.coeffs, &rhs.coeffs)
    } else {
      (&rhs.coeffs, &self.coeffs)
    };

    let mut coeffs = vec![];
    for i in 0..larger.len() {
      if i < smaller.len() {
        coeffs.push(&smaller[i] + &larger[i]);
      } else {
        coeffs.push(larger[i].clone());
      }
    }
    let x = Polynomial { f: self.f.clone(), coeffs, _private: () };
    x.normalize()  // addition can zero the leading coefficient
  }

  pub fn minus(&self, rhs: &Polynomial) -> Polynomial {
    let mut coeffs = vec![];
    for i in 0..std::cmp::max(self.coeffs.len(), rhs.coeffs.len()) {
      let a = if i < self.coeffs.len() {
        self.coeffs[i].clone()
      } else {
        self.f.elem(&0u8)
      };
      let b = if i < rhs.coeffs.len() {
        rhs.coeffs[i].negate()
      } else {
        self.f.elem(&0u8)
      };
      coeffs.push(a + b);
    }
    let p = Polynomial { f: self.f.clone(), coeffs, _private: () };
    p.normalize()
  }

  pub fn multiply_by(&self, rhs: &Polynomial) -> Polynomial {
    let self_degree = self.coeffs.len() - 1;
    let rhs_degree = rhs.coeffs.len() - 1;
    let new_len = self_degree + rhs_degree + 1;
    let mut coeffs = vec![self.f.elem(&0u8); new_len];

    for i in 0..self.coeffs.len() {
      for j in 0..rhs.coeffs.len() {
        let coeff = &self.coeffs[i] * &rhs.coeffs[j];
        let degree = i + j;
        coeffs[degree] = &coeffs[degree] + coeff;
      }
    }
    let p = Polynomial { f: self.f.clone(), coeffs, _private: () };
    p.normalize()
  }

  // multiply by the monic linear factor (x - k)
  pub fn mul_by_x_minus(&self, k: &PrimeFieldElem) -> Polynomial {
    let factor = Polynomial::new(&self.f, &vec![
      k.negate(),
      self.f.elem(&1u8),
    ]);
    self.multiply_by(&factor)
  }

  pub fn divide_by(&self, rhs: &Polynomial) -> DivResult {
    let divisor = rhs;
    let divisor_coeff = &divisor[divisor.len() - 1];
    assert!(
      !divisor_coeff.is_zero(),
      "found zero coeff at highest index. use Polynomial constructor",
    );

    let mut dividend = self.clone();
    if dividend.is_zero() {
      return DivResult::Quotient(Polynomial::zero(&self.f));
    }
    if dividend.len() < divisor.len() {
      return DivResult::QuotientRemainder((Polynomial::zero(&self.f), dividend));
    }
    let quotient_degree = dividend.len() - divisor.len();
    let mut quotient_coeffs = vec![self.f.elem(&0u8); quotient_degree + 1];

    while !dividend.is_zero() && dividend.len() >= divisor.len() {
      let dividend_coeff = &dividend[dividend.len() - 1];

      // build the term that cancels the dividend's leading coefficient
      let term_coeff = dividend_coeff / divisor_coeff;
      let term_degree = dividend.len() - divisor.len();
      let mut term_vec = vec![self.f.elem(&0u8); term_degree + 1];
      term_vec[term_degree] = term_coeff.clone();
      let term_poly = Polynomial::new(&self.f, &term_vec);

      quotient_coeffs[term_degree] = term_coeff;

      let poly2subtract = divisor.multiply_by(&term_poly);
      dividend = dividend.minus(&poly2subtract);
    }

    let quotient = Polynomial::new(&self.f, &quotient_coeffs);
    if dividend.is_zero() {
      DivResult::Quotient(quotient)
    } else {
      DivResult::QuotientRemainder((quotient, dividend))
    }
  }

  // Horner's rule from the highest coefficient down
  pub fn eval_at(&self, x: &PrimeFieldElem) -> PrimeFieldElem {
    let mut sum = self.f.elem(&0u8);
    for coeff in self.coeffs.iter().rev() {
      sum = sum * x + coeff;
    }
    sum
  }

  // unique polynomial of degree < xs.len() passing through all (xs[i], ys[i])
  pub fn lagrange_interpolation(
    f: &PrimeField,
    xs: &[PrimeFieldElem],
    ys: &[PrimeFieldElem],
  ) -> Result<Polynomial, Error> {
    if xs.len() != ys.len() || xs.is_empty() {
      return Err(Error::InvalidArgument(format!(
        "cannot interpolate through {} x-coords and {} y-coords",
        xs.len(), ys.len(),
      )));
    }

    let mut res = Polynomial::zero(f);
    for i in 0..xs.len() {
      if ys[i].is_zero() {
        continue;
      }
      let mut basis = Polynomial::new(f, &vec![ys[i].clone()]);
      let mut denominator = f.elem(&1u8);
      for j in 0..xs.len() {
        if j == i {
          continue;
        }
        basis = basis.mul_by_x_minus(&xs[j]);
        denominator = denominator * (&xs[i] - &xs[j]);
      }
      // fails if two x-coords coincide
      let denominator_inv = denominator.safe_inv().map_err(|_| {
        Error::InvalidArgument("interpolation x-coords must be distinct".to_string())
      })?;
      res = res.plus(&(&basis * &denominator_inv));
    }
    Ok(res)
  }

  // evaluate at the committed point hidden in the powers: sum of coeff_i * powers[i]
  pub fn eval_with_g1_hidings(&self, powers: &[G1Point]) -> G1Point {
    let mut sum = G1Point::point_at_infinity();
    for i in 0..self.coeffs.len() {
      sum = sum + (&powers[i] * &self.coeffs[i]);
    }
    sum
  }
}

impl<'a> Add<&Polynomial> for Polynomial {
  type Output = Polynomial;

  fn add(self, rhs: &Polynomial) -> Self::Output {
    self.plus(rhs)
  }
}

impl<'a> Add<&Polynomial> for &Polynomial {
  type Output = Polynomial;

  fn add(self, rhs: &Polynomial) -> Self::Output {
    self.plus(rhs)
  }
}

impl AddAssign<&Polynomial> for Polynomial {
  fn add_assign(&mut self, rhs: &Polynomial) {
    *self = &*self + rhs;
  }
}

macro_rules! impl_poly_mul {
  ($rhs: ty, $target: ty) => {
    impl<'a> Mul<$rhs> for $target {
      type Output = Polynomial;

      fn mul(self, rhs: $rhs) -> Self::Output {
        self.multiply_by(&rhs)
      }
    }
  };
}
impl_poly_mul!(Polynomial, Polynomial);
impl_poly_mul!(Polynomial, &Polynomial);
impl_poly_mul!(&Polynomial, Polynomial);
impl_poly_mul!(&Polynomial, &Polynomial);

impl<'a> Mul<&PrimeFieldElem> for &Polynomial {
  type Output = Polynomial;

  fn mul(self, rhs: &PrimeFieldElem) -> Self::Output {
    let p = Polynomial {
      f: self.f.clone(),
      coeffs: self.coeffs.iter().map(|coeff| coeff * rhs).collect(),
      _private: (),
    };
    p.normalize()
  }
}

impl MulAssign<&Polynomial> for Polynomial {
  fn mul_assign(&mut self, rhs: &Polynomial) {
    *self = &*self * rhs;
  }
}

impl<'a> Sub<&Polynomial> for Polynomial {
  type Output = Polynomial;

  fn sub(self, rhs: &Polynomial) -> Self::Output {
    self.minus(rhs)
  }
}

impl<'a> Sub<&Polynomial> for &Polynomial {
  type Output = Polynomial;

  fn sub(self, rhs: &Polynomial) -> Self::Output {
    self.minus(rhs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::DivResult::{Quotient, QuotientRemainder};
  use crate::building_block::random_number::RandomNumber;

  fn poly(f: &PrimeField, xs: &[i32]) -> Polynomial {
    let coeffs: Vec<PrimeFieldElem> =
      xs.iter().map(|x| f.elem_from_signed(x)).collect();
    Polynomial::new(f, &coeffs)
  }

  #[test]
  fn normalize_strips_trailing_zeros() {
    let f = &PrimeField::new(&3911u16);
    let p = poly(f, &[1, 2, 0, 0]);
    assert_eq!(p.len(), 2);

    let z = poly(f, &[0, 0, 0]);
    assert_eq!(z.len(), 1);
    assert!(z.is_zero());
  }

  #[test]
  fn add_cancelling_leading_terms() {
    let f = &PrimeField::new(&3911u16);
    let a = poly(f, &[1, 0, 3]);
    let b = poly(f, &[2, 1, -3]);
    let sum = a + &b;
    assert_eq!(sum, poly(f, &[3, 1]));
  }

  #[test]
  fn sub_rhs_of_higher_degree() {
    let f = &PrimeField::new(&3911u16);
    let a = poly(f, &[1, 1]);
    let b = poly(f, &[0, 0, 5]);
    let diff = a - &b;
    assert_eq!(diff, poly(f, &[1, 1, -5]));
  }

  #[test]
  fn mul_small_case() {
    let f = &PrimeField::new(&3911u16);
    // (2x + 3)(x + 4) = 2x^2 + 11x + 12
    let a = poly(f, &[3, 2]);
    let b = poly(f, &[4, 1]);
    assert_eq!(a * &b, poly(f, &[12, 11, 2]));
  }

  #[test]
  fn mul_by_x_minus_k() {
    let f = &PrimeField::new(&3911u16);
    // (x + 1)(x - 2) = x^2 - x - 2
    let a = poly(f, &[1, 1]);
    let b = a.mul_by_x_minus(&f.elem(&2u8));
    assert_eq!(b, poly(f, &[-2, -1, 1]));
    assert!(b.eval_at(&f.elem(&2u8)).is_zero());
  }

  #[test]
  fn eval_at_with_horner() {
    let f = &PrimeField::new(&3911u16);
    // 2x^3 + 5x + 9 at x = 3 is 78
    let p = poly(f, &[9, 5, 0, 2]);
    assert_eq!(p.eval_at(&f.elem(&3u8)), f.elem(&78u8));
  }

  #[test]
  fn div_with_zero_remainder() {
    let f = &PrimeField::new(&3911u16);
    // (x^2 + 3x + 2) / (x + 1) = x + 2
    let dividend = poly(f, &[2, 3, 1]);
    let divisor = poly(f, &[1, 1]);
    match dividend.divide_by(&divisor) {
      Quotient(q) => assert_eq!(q, poly(f, &[2, 1])),
      QuotientRemainder(_) => panic!("expected zero remainder"),
    }
  }

  #[test]
  fn div_with_nonzero_remainder() {
    let f = &PrimeField::new(&3911u16);
    // (x^2 + 1) / (x + 1) = x - 1 remainder 2
    let dividend = poly(f, &[1, 0, 1]);
    let divisor = poly(f, &[1, 1]);
    match dividend.divide_by(&divisor) {
      Quotient(_) => panic!("expected nonzero remainder"),
      QuotientRemainder((q, r)) => {
        assert_eq!(q, poly(f, &[-1, 1]));
        assert_eq!(r, poly(f, &[2]));
      },
    }
  }

  // (p * q) / q == p with zero remainder for random p, q != 0
  #[test]
  fn product_division_roundtrip() {
    let f = &PrimeField::new(&3911u16);
    let mut rand = RandomNumber::from_seed(3);
    for _ in 0..20 {
      let p = {
        let mut coeffs = vec![];
        for _ in 0..4 {
          coeffs.push(f.rand_elem(&mut rand, false).unwrap());
        }
        coeffs.push(f.rand_elem(&mut rand, true).unwrap());
        Polynomial::new(f, &coeffs)
      };
      let q = {
        let mut coeffs = vec![];
        for _ in 0..2 {
          coeffs.push(f.rand_elem(&mut rand, false).unwrap());
        }
        coeffs.push(f.rand_elem(&mut rand, true).unwrap());
        Polynomial::new(f, &coeffs)
      };
      match (&p * &q).divide_by(&q) {
        Quotient(h) => assert_eq!(h, p),
        QuotientRemainder(_) => panic!("product must be divisible by its factor"),
      }
    }
  }

  #[test]
  fn lagrange_interpolation_reproduces_points() {
    let f = &PrimeField::new(&3911u16);
    let xs = vec![f.elem(&1u8), f.elem(&2u8), f.elem(&3u8), f.elem(&4u8)];
    let ys = vec![f.elem(&12u8), f.elem(&0u8), f.elem(&7u8), f.elem(&9u8)];
    let p = Polynomial::lagrange_interpolation(f, &xs, &ys).unwrap();

    assert!(p.degree() < xs.len());
    for i in 0..xs.len() {
      assert_eq!(p.eval_at(&xs[i]), ys[i]);
    }
  }

  #[test]
  fn lagrange_interpolation_rejects_dup_x_coords() {
    let f = &PrimeField::new(&3911u16);
    let xs = vec![f.elem(&1u8), f.elem(&1u8)];
    let ys = vec![f.elem(&2u8), f.elem(&3u8)];
    assert!(Polynomial::lagrange_interpolation(f, &xs, &ys).is_err());
  }
}
