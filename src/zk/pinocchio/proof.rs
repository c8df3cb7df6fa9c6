use crate::building_block::curves::bn254::{
  g1_point::G1Point,
  g2_point::G2Point,
};

// the eight commitments making up a Pinocchio proof; pi_b lives in G2,
// everything else in G1
#[derive(Clone)]
pub struct Proof {
  pub pi_a: G1Point,
  pub pi_a_prime: G1Point,
  pub pi_b: G2Point,
  pub pi_b_prime: G1Point,
  pub pi_c: G1Point,
  pub pi_c_prime: G1Point,
  pub pi_h: G1Point,
  pub pi_k: G1Point,
}
