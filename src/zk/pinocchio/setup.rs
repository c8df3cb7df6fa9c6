use crate::{
  building_block::{
    curves::bn254::{
      g1_point::G1Point,
      g2_point::G2Point,
    },
    field::{
      polynomial::Polynomial,
      prime_field_elem::PrimeFieldElem,
    },
    random_number::RandomNumber,
  },
  error::Error,
  zk::pinocchio::{
    circuit::Circuit,
    qap::QAP,
  },
};
use tracing::debug;

// secret scalars sampled during setup; knowledge of any of them after
// the ceremony breaks soundness, so they are handed back in their own
// record for the caller to destroy
pub struct ToxicWaste {
  pub t: PrimeFieldElem,
  pub ka: PrimeFieldElem,
  pub kb: PrimeFieldElem,
  pub kc: PrimeFieldElem,
  pub kbeta: PrimeFieldElem,
  pub kgamma: PrimeFieldElem,
  pub rho_a: PrimeFieldElem,
  pub rho_b: PrimeFieldElem,
  pub rho_c: PrimeFieldElem,
}

pub struct ProvingKey {
  pub a: Vec<G1Point>,
  pub b_g2: Vec<G2Point>,
  pub b_g1: Vec<G1Point>,
  pub c: Vec<G1Point>,
  pub a_prime: Vec<G1Point>,
  pub b_prime: Vec<G1Point>,
  pub c_prime: Vec<G1Point>,
  pub k: Vec<G1Point>,
  pub h_powers: Vec<G1Point>,  // t^i * G1 for committing to h(x)
  pub z: Polynomial,
}

pub struct VerifyingKey {
  pub vka: G2Point,
  pub vkb: G1Point,
  pub vkc: G2Point,
  pub g1_kbg: G1Point,
  pub g2_kbg: G2Point,
  pub g2_kg: G2Point,
  pub vkz: G2Point,
  pub ic: Vec<G1Point>,  // public prefix of pk.a
}

pub struct TrustedSetup {
  pub pk: ProvingKey,
  pub vk: VerifyingKey,
}

impl TrustedSetup {
  pub fn generate(
    circuit: &Circuit,
    qap: &QAP,
    rand: &mut RandomNumber,
  ) -> Result<(TrustedSetup, ToxicWaste), Error> {
    debug!("sampling toxic scalars and populating keys");
    let f = &qap.f;
    let g1 = &G1Point::g();
    let g2 = &G2Point::g();

    let t = f.rand_elem(rand, true)?;
    let ka = f.rand_elem(rand, true)?;
    let kb = f.rand_elem(rand, true)?;
    let kc = f.rand_elem(rand, true)?;
    let kbeta = f.rand_elem(rand, true)?;
    let kgamma = f.rand_elem(rand, true)?;
    let rho_a = f.rand_elem(rand, true)?;
    let rho_b = f.rand_elem(rand, true)?;
    let rho_c = &rho_a * &rho_b;
    let kbg = &kbeta * &kgamma;

    let vka = (g2 * &ka).to_affine();
    let vkb = (g1 * &kb).to_affine();
    let vkc = (g2 * &kc).to_affine();
    let g1_kbg = (g1 * &kbg).to_affine();
    let g2_kbg = (g2 * &kbg).to_affine();
    let g2_kg = (g2 * &kgamma).to_affine();

    let mut a = vec![];
    let mut b_g2 = vec![];
    let mut b_g1 = vec![];
    let mut c = vec![];
    let mut a_prime = vec![];
    let mut b_prime = vec![];
    let mut c_prime = vec![];
    let mut k = vec![];
    let mut ic = vec![];

    for i in 0..circuit.n_vars {
      let rat = &rho_a * qap.alphas[i].eval_at(&t);
      let rbt = &rho_b * qap.betas[i].eval_at(&t);
      let rct = &rho_c * qap.gammas[i].eval_at(&t);

      let a_i = (g1 * &rat).to_affine();
      let b_g1_i = (g1 * &rbt).to_affine();

      if i <= circuit.n_public {
        ic.push(a_i.clone());
      }

      a_prime.push((&a_i * &ka).to_affine());
      b_prime.push((&b_g1_i * &kb).to_affine());

      let c_i = (g1 * &rct).to_affine();
      c_prime.push((&c_i * &kc).to_affine());

      let kt = &rat + &rbt + &rct;
      k.push((g1 * &(&kbeta * &kt)).to_affine());

      a.push(a_i);
      b_g2.push((g2 * &rbt).to_affine());
      b_g1.push(b_g1_i);
      c.push(c_i);
    }

    let vkz = (g2 * &(&rho_c * qap.z.eval_at(&t))).to_affine();

    debug!("committing to {} powers of t", qap.z.degree() + 1);
    let mut h_powers = vec![];
    let mut t_pow = f.elem(&1u8);
    for _ in 0..=qap.z.degree() {
      h_powers.push((g1 * &t_pow).to_affine());
      t_pow = t_pow * &t;
    }

    let pk = ProvingKey {
      a,
      b_g2,
      b_g1,
      c,
      a_prime,
      b_prime,
      c_prime,
      k,
      h_powers,
      z: qap.z.clone(),
    };
    let vk = VerifyingKey {
      vka,
      vkb,
      vkc,
      g1_kbg,
      g2_kbg,
      g2_kg,
      vkz,
      ic,
    };
    let toxic = ToxicWaste {
      t,
      ka,
      kb,
      kc,
      kbeta,
      kgamma,
      rho_a,
      rho_b,
      rho_c,
    };

    Ok((TrustedSetup { pk, vk }, toxic))
  }
}
