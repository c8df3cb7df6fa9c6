use crate::{
  building_block::{
    curves::bn254::{
      fq2::Fq2,
      g1_point::G1Point,
      g2_point::G2Point,
      params::Params,
    },
    field::{
      polynomial::Polynomial,
      prime_field::PrimeField,
      prime_field_elem::PrimeFieldElem,
    },
  },
  error::Error,
  zk::pinocchio::{
    proof::Proof,
    setup::{ProvingKey, TrustedSetup, ToxicWaste, VerifyingKey},
  },
};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

// on-disk shape of every artifact: base-10 decimal strings per field
// coordinate, points as Jacobian triples, G2 coordinates as [c0, c1]

fn elem_to_str(e: &PrimeFieldElem) -> String {
  e.e.to_string()
}

fn elem_from_str(f: &PrimeField, s: &str) -> Result<PrimeFieldElem, Error> {
  let n = s.parse::<BigUint>().map_err(|_| {
    Error::Serialization(format!("not a decimal integer: {}", s))
  })?;
  if n >= f.order {
    return Err(Error::Serialization(format!(
      "coordinate {} exceeds the field modulus", s,
    )));
  }
  Ok(f.elem(&n))
}

fn g1_to_rec(p: &G1Point) -> Vec<String> {
  vec![
    elem_to_str(&p.x),
    elem_to_str(&p.y),
    elem_to_str(&p.z),
  ]
}

fn g1_from_rec(rec: &[String]) -> Result<G1Point, Error> {
  if rec.len() != 3 {
    return Err(Error::Serialization(format!(
      "a G1 point takes 3 coordinates, found {}", rec.len(),
    )));
  }
  let f = Params::base_prime_field();
  let p = G1Point::new(
    &elem_from_str(&f, &rec[0])?,
    &elem_from_str(&f, &rec[1])?,
    &elem_from_str(&f, &rec[2])?,
  );
  if !p.is_on_curve() {
    return Err(Error::Serialization("G1 point is not on the curve".to_string()));
  }
  Ok(p)
}

fn fq2_to_rec(x: &Fq2) -> Vec<String> {
  vec![elem_to_str(&x.u0), elem_to_str(&x.u1)]
}

fn fq2_from_rec(rec: &[String]) -> Result<Fq2, Error> {
  if rec.len() != 2 {
    return Err(Error::Serialization(format!(
      "an Fq2 coordinate takes 2 components, found {}", rec.len(),
    )));
  }
  let f = Params::base_prime_field();
  Ok(Fq2::new(
    &elem_from_str(&f, &rec[1])?,
    &elem_from_str(&f, &rec[0])?,
  ))
}

fn g2_to_rec(p: &G2Point) -> Vec<Vec<String>> {
  vec![
    fq2_to_rec(&p.x),
    fq2_to_rec(&p.y),
    fq2_to_rec(&p.z),
  ]
}

fn g2_from_rec(rec: &[Vec<String>]) -> Result<G2Point, Error> {
  if rec.len() != 3 {
    return Err(Error::Serialization(format!(
      "a G2 point takes 3 coordinates, found {}", rec.len(),
    )));
  }
  let p = G2Point::new(
    &fq2_from_rec(&rec[0])?,
    &fq2_from_rec(&rec[1])?,
    &fq2_from_rec(&rec[2])?,
  );
  if !p.is_on_curve() {
    return Err(Error::Serialization("G2 point is not on the twist curve".to_string()));
  }
  Ok(p)
}

fn poly_to_rec(p: &Polynomial) -> Vec<String> {
  p.coeffs.iter().map(elem_to_str).collect()
}

fn poly_from_rec(rec: &[String]) -> Result<Polynomial, Error> {
  if rec.is_empty() {
    return Err(Error::Serialization("polynomial has no coefficients".to_string()));
  }
  let f = Params::subgroup();
  let mut coeffs = vec![];
  for s in rec {
    coeffs.push(elem_from_str(&f, s)?);
  }
  Ok(Polynomial::new(&f, &coeffs))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofRecord {
  pub pi_a: Vec<String>,
  pub pi_a_prime: Vec<String>,
  pub pi_b: Vec<Vec<String>>,
  pub pi_b_prime: Vec<String>,
  pub pi_c: Vec<String>,
  pub pi_c_prime: Vec<String>,
  pub pi_h: Vec<String>,
  pub pi_k: Vec<String>,
}

impl From<&Proof> for ProofRecord {
  fn from(p: &Proof) -> Self {
    ProofRecord {
      pi_a: g1_to_rec(&p.pi_a),
      pi_a_prime: g1_to_rec(&p.pi_a_prime),
      pi_b: g2_to_rec(&p.pi_b),
      pi_b_prime: g1_to_rec(&p.pi_b_prime),
      pi_c: g1_to_rec(&p.pi_c),
      pi_c_prime: g1_to_rec(&p.pi_c_prime),
      pi_h: g1_to_rec(&p.pi_h),
      pi_k: g1_to_rec(&p.pi_k),
    }
  }
}

impl TryFrom<&ProofRecord> for Proof {
  type Error = Error;

  fn try_from(rec: &ProofRecord) -> Result<Self, Error> {
    Ok(Proof {
      pi_a: g1_from_rec(&rec.pi_a)?,
      pi_a_prime: g1_from_rec(&rec.pi_a_prime)?,
      pi_b: g2_from_rec(&rec.pi_b)?,
      pi_b_prime: g1_from_rec(&rec.pi_b_prime)?,
      pi_c: g1_from_rec(&rec.pi_c)?,
      pi_c_prime: g1_from_rec(&rec.pi_c_prime)?,
      pi_h: g1_from_rec(&rec.pi_h)?,
      pi_k: g1_from_rec(&rec.pi_k)?,
    })
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyingKeyRecord {
  pub vka: Vec<Vec<String>>,
  pub vkb: Vec<String>,
  pub vkc: Vec<Vec<String>>,
  pub g1_kbg: Vec<String>,
  pub g2_kbg: Vec<Vec<String>>,
  pub g2_kg: Vec<Vec<String>>,
  pub vkz: Vec<Vec<String>>,
  pub ic: Vec<Vec<String>>,
}

impl From<&VerifyingKey> for VerifyingKeyRecord {
  fn from(vk: &VerifyingKey) -> Self {
    VerifyingKeyRecord {
      vka: g2_to_rec(&vk.vka),
      vkb: g1_to_rec(&vk.vkb),
      vkc: g2_to_rec(&vk.vkc),
      g1_kbg: g1_to_rec(&vk.g1_kbg),
      g2_kbg: g2_to_rec(&vk.g2_kbg),
      g2_kg: g2_to_rec(&vk.g2_kg),
      vkz: g2_to_rec(&vk.vkz),
      ic: vk.ic.iter().map(g1_to_rec).collect(),
    }
  }
}

impl TryFrom<&VerifyingKeyRecord> for VerifyingKey {
  type Error = Error;

  fn try_from(rec: &VerifyingKeyRecord) -> Result<Self, Error> {
    let mut ic = vec![];
    for p in &rec.ic {
      ic.push(g1_from_rec(p)?);
    }
    Ok(VerifyingKey {
      vka: g2_from_rec(&rec.vka)?,
      vkb: g1_from_rec(&rec.vkb)?,
      vkc: g2_from_rec(&rec.vkc)?,
      g1_kbg: g1_from_rec(&rec.g1_kbg)?,
      g2_kbg: g2_from_rec(&rec.g2_kbg)?,
      g2_kg: g2_from_rec(&rec.g2_kg)?,
      vkz: g2_from_rec(&rec.vkz)?,
      ic,
    })
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvingKeyRecord {
  pub a: Vec<Vec<String>>,
  pub b_g2: Vec<Vec<Vec<String>>>,
  pub b_g1: Vec<Vec<String>>,
  pub c: Vec<Vec<String>>,
  pub a_prime: Vec<Vec<String>>,
  pub b_prime: Vec<Vec<String>>,
  pub c_prime: Vec<Vec<String>>,
  pub k: Vec<Vec<String>>,
  pub h_powers: Vec<Vec<String>>,
  pub z: Vec<String>,
}

impl From<&ProvingKey> for ProvingKeyRecord {
  fn from(pk: &ProvingKey) -> Self {
    ProvingKeyRecord {
      a: pk.a.iter().map(g1_to_rec).collect(),
      b_g2: pk.b_g2.iter().map(g2_to_rec).collect(),
      b_g1: pk.b_g1.iter().map(g1_to_rec).collect(),
      c: pk.c.iter().map(g1_to_rec).collect(),
      a_prime: pk.a_prime.iter().map(g1_to_rec).collect(),
      b_prime: pk.b_prime.iter().map(g1_to_rec).collect(),
      c_prime: pk.c_prime.iter().map(g1_to_rec).collect(),
      k: pk.k.iter().map(g1_to_rec).collect(),
      h_powers: pk.h_powers.iter().map(g1_to_rec).collect(),
      z: poly_to_rec(&pk.z),
    }
  }
}

impl TryFrom<&ProvingKeyRecord> for ProvingKey {
  type Error = Error;

  fn try_from(rec: &ProvingKeyRecord) -> Result<Self, Error> {
    let g1_vec = |v: &Vec<Vec<String>>| -> Result<Vec<G1Point>, Error> {
      v.iter().map(|p| g1_from_rec(p)).collect()
    };
    let mut b_g2 = vec![];
    for p in &rec.b_g2 {
      b_g2.push(g2_from_rec(p)?);
    }
    Ok(ProvingKey {
      a: g1_vec(&rec.a)?,
      b_g2,
      b_g1: g1_vec(&rec.b_g1)?,
      c: g1_vec(&rec.c)?,
      a_prime: g1_vec(&rec.a_prime)?,
      b_prime: g1_vec(&rec.b_prime)?,
      c_prime: g1_vec(&rec.c_prime)?,
      k: g1_vec(&rec.k)?,
      h_powers: g1_vec(&rec.h_powers)?,
      z: poly_from_rec(&rec.z)?,
    })
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedSetupRecord {
  pub pk: ProvingKeyRecord,
  pub vk: VerifyingKeyRecord,
}

impl From<&TrustedSetup> for TrustedSetupRecord {
  fn from(s: &TrustedSetup) -> Self {
    TrustedSetupRecord {
      pk: ProvingKeyRecord::from(&s.pk),
      vk: VerifyingKeyRecord::from(&s.vk),
    }
  }
}

impl TryFrom<&TrustedSetupRecord> for TrustedSetup {
  type Error = Error;

  fn try_from(rec: &TrustedSetupRecord) -> Result<Self, Error> {
    Ok(TrustedSetup {
      pk: ProvingKey::try_from(&rec.pk)?,
      vk: VerifyingKey::try_from(&rec.vk)?,
    })
  }
}

// kept apart from TrustedSetupRecord on purpose; whoever persists this
// record is responsible for deleting it once the ceremony is over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToxicRecord {
  pub t: String,
  pub ka: String,
  pub kb: String,
  pub kc: String,
  pub kbeta: String,
  pub kgamma: String,
  pub rho_a: String,
  pub rho_b: String,
  pub rho_c: String,
}

impl From<&ToxicWaste> for ToxicRecord {
  fn from(t: &ToxicWaste) -> Self {
    ToxicRecord {
      t: elem_to_str(&t.t),
      ka: elem_to_str(&t.ka),
      kb: elem_to_str(&t.kb),
      kc: elem_to_str(&t.kc),
      kbeta: elem_to_str(&t.kbeta),
      kgamma: elem_to_str(&t.kgamma),
      rho_a: elem_to_str(&t.rho_a),
      rho_b: elem_to_str(&t.rho_b),
      rho_c: elem_to_str(&t.rho_c),
    }
  }
}

impl TryFrom<&ToxicRecord> for ToxicWaste {
  type Error = Error;

  fn try_from(rec: &ToxicRecord) -> Result<Self, Error> {
    let f = Params::subgroup();
    Ok(ToxicWaste {
      t: elem_from_str(&f, &rec.t)?,
      ka: elem_from_str(&f, &rec.ka)?,
      kb: elem_from_str(&f, &rec.kb)?,
      kc: elem_from_str(&f, &rec.kc)?,
      kbeta: elem_from_str(&f, &rec.kbeta)?,
      kgamma: elem_from_str(&f, &rec.kgamma)?,
      rho_a: elem_from_str(&f, &rec.rho_a)?,
      rho_b: elem_from_str(&f, &rec.rho_b)?,
      rho_c: elem_from_str(&f, &rec.rho_c)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::building_block::zero::Zero;

  fn sample_proof() -> Proof {
    let fr = G1Point::curve_group();
    let g1 = G1Point::g();
    let g2 = G2Point::g();
    Proof {
      pi_a: (&g1 * &fr.elem(&2u8)).to_affine(),
      pi_a_prime: (&g1 * &fr.elem(&3u8)).to_affine(),
      pi_b: (&g2 * &fr.elem(&4u8)).to_affine(),
      pi_b_prime: (&g1 * &fr.elem(&5u8)).to_affine(),
      pi_c: (&g1 * &fr.elem(&6u8)).to_affine(),
      pi_c_prime: (&g1 * &fr.elem(&7u8)).to_affine(),
      pi_h: (&g1 * &fr.elem(&8u8)).to_affine(),
      pi_k: G1Point::point_at_infinity(),
    }
  }

  #[test]
  fn proof_record_roundtrip() {
    let proof = sample_proof();
    let rec = ProofRecord::from(&proof);
    let json = serde_json::to_string(&rec).unwrap();
    let rec2: ProofRecord = serde_json::from_str(&json).unwrap();
    let proof2 = Proof::try_from(&rec2).unwrap();

    assert_eq!(proof2.pi_a, proof.pi_a);
    assert_eq!(proof2.pi_b, proof.pi_b);
    assert!(proof2.pi_k.is_zero());
  }

  #[test]
  fn malformed_decimal_is_rejected() {
    let mut rec = ProofRecord::from(&sample_proof());
    rec.pi_a[0] = "not-a-number".to_string();
    match Proof::try_from(&rec) {
      Err(Error::Serialization(_)) => (),
      _ => panic!("expected a serialization error"),
    }
  }

  #[test]
  fn off_curve_point_is_rejected() {
    let mut rec = ProofRecord::from(&sample_proof());
    rec.pi_a = vec!["1".to_string(), "1".to_string(), "1".to_string()];
    match Proof::try_from(&rec) {
      Err(Error::Serialization(_)) => (),
      _ => panic!("expected a serialization error"),
    }
  }

  #[test]
  fn out_of_range_coordinate_is_rejected() {
    let mut rec = ProofRecord::from(&sample_proof());
    let q = Params::base_prime_field().order.to_string();
    rec.pi_h[0] = q;
    assert!(Proof::try_from(&rec).is_err());
  }

  #[test]
  fn toxic_record_roundtrip() {
    let f = Params::subgroup();
    let toxic = ToxicWaste {
      t: f.elem(&11u8),
      ka: f.elem(&12u8),
      kb: f.elem(&13u8),
      kc: f.elem(&14u8),
      kbeta: f.elem(&15u8),
      kgamma: f.elem(&16u8),
      rho_a: f.elem(&17u8),
      rho_b: f.elem(&18u8),
      rho_c: f.elem(&19u8),
    };
    let rec = ToxicRecord::from(&toxic);
    let back = ToxicWaste::try_from(&rec).unwrap();
    assert_eq!(back.t, toxic.t);
    assert_eq!(back.rho_c, toxic.rho_c);
  }
}
