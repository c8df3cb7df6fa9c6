use crate::{
  building_block::field::{
    prime_field::PrimeField,
    prime_field_elem::PrimeFieldElem,
  },
  error::Error,
};

// rank-1 constraint system over Fr: the witness w satisfies the system
// iff (A w) o (B w) = C w holds elementwise
#[derive(Clone)]
pub struct R1CS {
  pub f: PrimeField,
  pub a: Vec<Vec<PrimeFieldElem>>,
  pub b: Vec<Vec<PrimeFieldElem>>,
  pub c: Vec<Vec<PrimeFieldElem>>,
}

impl R1CS {
  pub fn new(
    f: &PrimeField,
    a: &Vec<Vec<PrimeFieldElem>>,
    b: &Vec<Vec<PrimeFieldElem>>,
    c: &Vec<Vec<PrimeFieldElem>>,
  ) -> Result<Self, Error> {
    if a.is_empty() || a.len() != b.len() || a.len() != c.len() {
      return Err(Error::InvalidArgument(format!(
        "constraint matrices must be non-empty and of identical height; got {}, {}, {}",
        a.len(), b.len(), c.len(),
      )));
    }
    let width = a[0].len();
    if width == 0 {
      return Err(Error::InvalidArgument("constraint matrices have no columns".to_string()));
    }
    for m in [a, b, c] {
      for row in m {
        if row.len() != width {
          return Err(Error::InvalidArgument(format!(
            "ragged constraint matrix; expected width {}, found {}",
            width, row.len(),
          )));
        }
      }
    }
    Ok(R1CS {
      f: f.clone(),
      a: a.clone(),
      b: b.clone(),
      c: c.clone(),
    })
  }

  pub fn num_constraints(&self) -> usize {
    self.a.len()
  }

  pub fn num_signals(&self) -> usize {
    self.a[0].len()
  }

  fn dot(&self, row: &[PrimeFieldElem], w: &[PrimeFieldElem]) -> PrimeFieldElem {
    let mut sum = self.f.elem(&0u8);
    for i in 0..row.len() {
      sum = sum + &row[i] * &w[i];
    }
    sum
  }

  pub fn is_satisfied_by(&self, w: &[PrimeFieldElem]) -> Result<bool, Error> {
    if w.len() != self.num_signals() {
      return Err(Error::InvalidArgument(format!(
        "witness length {} does not match the {} signals of the system",
        w.len(), self.num_signals(),
      )));
    }
    for i in 0..self.num_constraints() {
      let lhs = self.dot(&self.a[i], w) * self.dot(&self.b[i], w);
      let rhs = self.dot(&self.c[i], w);
      if lhs != rhs {
        return Ok(false);
      }
    }
    Ok(true)
  }
}
