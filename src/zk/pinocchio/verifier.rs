use crate::{
  building_block::{
    curves::bn254::{
      g1_point::G1Point,
      g2_point::G2Point,
      pairing::Pairing,
    },
    field::prime_field_elem::PrimeFieldElem,
  },
  error::Error,
  zk::pinocchio::{
    proof::Proof,
    setup::VerifyingKey,
  },
};
use tracing::debug;

pub struct PinocchioVerifier {
  pairing: Pairing,
}

impl PinocchioVerifier {
  pub fn new() -> Self {
    PinocchioVerifier {
      pairing: Pairing::new(),
    }
  }

  // the five pairing equations, individually; checks 1-3 bind the
  // shifted commitments, check 4 is the QAP divisibility test and
  // check 5 ties the A, B, C commitments to one witness
  pub fn check_equations(
    &self,
    vk: &VerifyingKey,
    proof: &Proof,
    public_signals: &[PrimeFieldElem],
  ) -> Result<[bool; 5], Error> {
    if public_signals.len() + 1 != vk.ic.len() {
      return Err(Error::InvalidArgument(format!(
        "{} public signals against a key expecting {}",
        public_signals.len(),
        vk.ic.len() - 1,
      )));
    }

    let e = |p: &G1Point, q: &G2Point| self.pairing.ate(p, q);
    let g2 = G2Point::g();

    // public part of the linear combination, rebuilt from the key
    let mut vkx = vk.ic[0].clone();
    for i in 0..public_signals.len() {
      vkx += &vk.ic[i + 1] * &public_signals[i];
    }

    debug!("evaluating the five pairing checks");
    let c1 = e(&proof.pi_a, &vk.vka) == e(&proof.pi_a_prime, &g2);
    let c2 = e(&vk.vkb, &proof.pi_b) == e(&proof.pi_b_prime, &g2);
    let c3 = e(&proof.pi_c, &vk.vkc) == e(&proof.pi_c_prime, &g2);
    let c4 = e(&(&vkx + &proof.pi_a), &proof.pi_b)
      == e(&proof.pi_h, &vk.vkz) * e(&proof.pi_c, &g2);
    let c5 = e(&(&vkx + &proof.pi_a + &proof.pi_c), &vk.g2_kbg)
      * e(&vk.g1_kbg, &proof.pi_b)
      == e(&proof.pi_k, &vk.g2_kg);

    Ok([c1, c2, c3, c4, c5])
  }

  // Ok(false) means the proof is invalid; Err is reserved for malformed
  // input such as a public-signal count mismatch
  pub fn verify(
    &self,
    vk: &VerifyingKey,
    proof: &Proof,
    public_signals: &[PrimeFieldElem],
  ) -> Result<bool, Error> {
    let checks = self.check_equations(vk, proof, public_signals)?;
    Ok(checks.iter().all(|c| *c))
  }
}

impl Default for PinocchioVerifier {
  fn default() -> Self {
    PinocchioVerifier::new()
  }
}
