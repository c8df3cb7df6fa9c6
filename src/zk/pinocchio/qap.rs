use crate::{
  building_block::field::{
    polynomial::{DivResult, Polynomial},
    prime_field::PrimeField,
    prime_field_elem::PrimeFieldElem,
  },
  error::Error,
  zk::pinocchio::r1cs::R1CS,
};

// quadratic arithmetic program: one polynomial triple per signal plus
// the target polynomial vanishing on the evaluation points 1..m
pub struct QAP {
  pub f: PrimeField,
  pub alphas: Vec<Polynomial>,
  pub betas: Vec<Polynomial>,
  pub gammas: Vec<Polynomial>,
  pub z: Polynomial,
}

impl QAP {
  // column j of each matrix becomes the polynomial passing through
  // (i, M[i-1][j]) for i = 1..m
  pub fn from_r1cs(f: &PrimeField, r1cs: &R1CS) -> Result<QAP, Error> {
    let m = r1cs.num_constraints();
    let n = r1cs.num_signals();

    let xs: Vec<PrimeFieldElem> = (1..=m).map(|i| f.elem(&i)).collect();

    let mut alphas = vec![];
    let mut betas = vec![];
    let mut gammas = vec![];

    for j in 0..n {
      let column = |mat: &Vec<Vec<PrimeFieldElem>>| -> Vec<PrimeFieldElem> {
        (0..m).map(|i| mat[i][j].clone()).collect()
      };
      alphas.push(Polynomial::lagrange_interpolation(f, &xs, &column(&r1cs.a))?);
      betas.push(Polynomial::lagrange_interpolation(f, &xs, &column(&r1cs.b))?);
      gammas.push(Polynomial::lagrange_interpolation(f, &xs, &column(&r1cs.c))?);
    }

    let z = QAP::target_polynomial(f, m);
    debug_assert_eq!(z.degree(), m);

    Ok(QAP {
      f: f.clone(),
      alphas,
      betas,
      gammas,
      z,
    })
  }

  // Z(x) = (x-1)(x-2)..(x-m)
  pub fn target_polynomial(f: &PrimeField, m: usize) -> Polynomial {
    let mut acc = Polynomial::new(f, &vec![f.elem(&1u8)]);
    for i in 1..=m {
      acc = acc.mul_by_x_minus(&f.elem(&i));
    }
    acc
  }

  // p(x) = (sum w_j alpha_j)(sum w_j beta_j) - (sum w_j gamma_j)
  pub fn combine(&self, witness: &[PrimeFieldElem]) -> Result<Polynomial, Error> {
    if witness.len() != self.alphas.len() {
      return Err(Error::InvalidArgument(format!(
        "witness length {} does not match the {} signal polynomials",
        witness.len(), self.alphas.len(),
      )));
    }

    let weighted_sum = |polys: &Vec<Polynomial>| -> Polynomial {
      let mut sum = Polynomial::zero(&self.f);
      for (j, poly) in polys.iter().enumerate() {
        sum = sum.plus(&(poly * &witness[j]));
      }
      sum
    };

    let ax = weighted_sum(&self.alphas);
    let bx = weighted_sum(&self.betas);
    let cx = weighted_sum(&self.gammas);
    Ok(ax * &bx - &cx)
  }

  // h with p = h * Z; a nonzero remainder means the witness behind p
  // does not satisfy the constraint system
  pub fn divide_by_target(&self, p: &Polynomial) -> Result<Polynomial, Error> {
    match p.divide_by(&self.z) {
      DivResult::Quotient(h) => Ok(h),
      DivResult::QuotientRemainder(_) => Err(Error::InvalidWitness(
        "A(x)B(x) - C(x) is not divisible by the target polynomial".to_string(),
      )),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn to_elems(f: &PrimeField, rows: &[Vec<i32>]) -> Vec<Vec<PrimeFieldElem>> {
    rows.iter()
      .map(|row| row.iter().map(|x| f.elem_from_signed(x)).collect())
      .collect()
  }

  // x * x = sq, sq * x = cube over signals [one, x, sq, cube]
  fn cube_r1cs(f: &PrimeField) -> R1CS {
    let a = to_elems(f, &[vec![0, 1, 0, 0], vec![0, 0, 1, 0]]);
    let b = to_elems(f, &[vec![0, 1, 0, 0], vec![0, 1, 0, 0]]);
    let c = to_elems(f, &[vec![0, 0, 1, 0], vec![0, 0, 0, 1]]);
    R1CS::new(f, &a, &b, &c).unwrap()
  }

  #[test]
  fn target_polynomial_vanishes_on_evaluation_points() {
    let f = PrimeField::new(&3911u16);
    let z = QAP::target_polynomial(&f, 4);
    assert_eq!(z.degree(), 4);
    for i in 1u8..=4 {
      assert!(z.eval_at(&f.elem(&i)).is_zero());
    }
    assert!(!z.eval_at(&f.elem(&5u8)).is_zero());
  }

  #[test]
  fn qap_polynomials_interpolate_matrix_columns() {
    let f = PrimeField::new(&3911u16);
    let r1cs = cube_r1cs(&f);
    let qap = QAP::from_r1cs(&f, &r1cs).unwrap();

    assert_eq!(qap.alphas.len(), 4);
    for j in 0..4 {
      for i in 0..2 {
        let x = f.elem(&(i + 1));
        assert_eq!(qap.alphas[j].eval_at(&x), r1cs.a[i][j]);
        assert_eq!(qap.betas[j].eval_at(&x), r1cs.b[i][j]);
        assert_eq!(qap.gammas[j].eval_at(&x), r1cs.c[i][j]);
      }
    }
  }

  #[test]
  fn target_divides_combination_of_satisfying_witness() {
    let f = PrimeField::new(&3911u16);
    let r1cs = cube_r1cs(&f);
    let qap = QAP::from_r1cs(&f, &r1cs).unwrap();

    let w = vec![f.elem(&1u8), f.elem(&3u8), f.elem(&9u8), f.elem(&27u8)];
    assert!(r1cs.is_satisfied_by(&w).unwrap());

    let p = qap.combine(&w).unwrap();
    let h = qap.divide_by_target(&p).unwrap();
    assert_eq!(&h * &qap.z, p);
  }

  #[test]
  fn target_division_fails_for_bad_witness() {
    let f = PrimeField::new(&3911u16);
    let r1cs = cube_r1cs(&f);
    let qap = QAP::from_r1cs(&f, &r1cs).unwrap();

    let w = vec![f.elem(&1u8), f.elem(&3u8), f.elem(&10u8), f.elem(&27u8)];
    assert!(!r1cs.is_satisfied_by(&w).unwrap());

    let p = qap.combine(&w).unwrap();
    match qap.divide_by_target(&p) {
      Err(Error::InvalidWitness(_)) => (),
      _ => panic!("expected InvalidWitness"),
    }
  }
}
