use crate::{
  error::Error,
  zk::pinocchio::r1cs::R1CS,
};

// signal layout summary the circuit compiler hands over together with
// the constraint matrices: witness index 0 is the constant one,
// indices 1..=n_public are the public signals, the rest are private
#[derive(Clone)]
pub struct Circuit {
  pub n_signals: usize,
  pub n_public: usize,
  pub n_vars: usize,
  pub r1cs: R1CS,
}

impl Circuit {
  pub fn new(n_public: usize, r1cs: &R1CS) -> Result<Self, Error> {
    let n_vars = r1cs.num_signals();
    if n_public >= n_vars {
      return Err(Error::InvalidArgument(format!(
        "{} public signals do not fit into {} witness slots",
        n_public, n_vars,
      )));
    }
    Ok(Circuit {
      n_signals: n_vars,
      n_public,
      n_vars,
      r1cs: r1cs.clone(),
    })
  }
}
