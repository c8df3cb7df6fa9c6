use crate::{
  building_block::{
    curves::bn254::{
      g1_point::G1Point,
      g2_point::G2Point,
    },
    field::prime_field_elem::PrimeFieldElem,
  },
  error::Error,
  zk::pinocchio::{
    circuit::Circuit,
    proof::Proof,
    qap::QAP,
    setup::ProvingKey,
  },
};
use tracing::debug;

pub struct PinocchioProver();

impl PinocchioProver {
  // combines the witness with the proving key; public signals are left
  // out of pi_a because the verifier rebuilds that part from vk.ic
  pub fn generate_proof(
    circuit: &Circuit,
    pk: &ProvingKey,
    qap: &QAP,
    witness: &[PrimeFieldElem],
  ) -> Result<Proof, Error> {
    if witness.len() != circuit.n_vars {
      return Err(Error::InvalidArgument(format!(
        "witness length {} does not match the circuit's {} signals",
        witness.len(), circuit.n_vars,
      )));
    }
    debug!("accumulating proof points over {} signals", circuit.n_vars);

    let mut pi_a = G1Point::point_at_infinity();
    let mut pi_a_prime = G1Point::point_at_infinity();
    let mut pi_b = G2Point::point_at_infinity();
    let mut pi_b_prime = G1Point::point_at_infinity();
    let mut pi_c = G1Point::point_at_infinity();
    let mut pi_c_prime = G1Point::point_at_infinity();
    let mut pi_k = G1Point::point_at_infinity();

    for i in (circuit.n_public + 1)..circuit.n_vars {
      let w = &witness[i];
      pi_a += &pk.a[i] * w;
      pi_a_prime += &pk.a_prime[i] * w;
    }

    for i in 0..circuit.n_vars {
      let w = &witness[i];
      pi_b += &pk.b_g2[i] * w;
      pi_b_prime += &pk.b_prime[i] * w;
      pi_c += &pk.c[i] * w;
      pi_c_prime += &pk.c_prime[i] * w;
      pi_k += &pk.k[i] * w;
    }

    debug!("computing h(x) and its commitment");
    let p = qap.combine(witness)?;
    let h = qap.divide_by_target(&p)?;
    let pi_h = h.eval_with_g1_hidings(&pk.h_powers);

    Ok(Proof {
      pi_a: pi_a.to_affine(),
      pi_a_prime: pi_a_prime.to_affine(),
      pi_b: pi_b.to_affine(),
      pi_b_prime: pi_b_prime.to_affine(),
      pi_c: pi_c.to_affine(),
      pi_c_prime: pi_c_prime.to_affine(),
      pi_h: pi_h.to_affine(),
      pi_k: pi_k.to_affine(),
    })
  }
}
