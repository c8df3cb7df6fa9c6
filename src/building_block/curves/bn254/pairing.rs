use crate::building_block::{
  curves::bn254::{
    fq1::Fq1,
    fq12::Fq12,
    fq2::Fq2,
    fq6::Fq6,
    g1_point::G1Point,
    g2_point::G2Point,
    params::Params,
  },
  zero::Zero,
};
use num_bigint::BigUint;
use num_traits::Zero as NumTraitsZero;

// coefficients of a line evaluated during the Miller loop; against the
// G1 argument (px, py) the line becomes
// ell_0 + (ell_vv * px) * v^2 + (ell_vw * py) * v*w
pub struct EllCoeffs {
  pub ell_0: Fq2,
  pub ell_vw: Fq2,
  pub ell_vv: Fq2,
}

// Miller-loop accumulator in homogeneous projective coordinates
struct G2Hom {
  x: Fq2,
  y: Fq2,
  z: Fq2,
}

pub struct Pairing {
  loop_bits: Vec<bool>,
}

impl Pairing {
  pub fn new() -> Self {
    // bits of 6u + 2 below the most significant one, highest first
    let mut l = Params::ate_loop_count();
    let one = BigUint::from(1u8);
    let mut loop_bits: Vec<bool> = vec![];

    while !l.is_zero() {
      let b = &l & &one;
      loop_bits.push(!b.is_zero());
      l = l >> 1u32;
    }
    loop_bits.reverse();
    loop_bits.remove(0);

    Pairing { loop_bits }
  }

  fn double_step(r: &mut G2Hom) -> EllCoeffs {
    let two_inv = Params::two_inv();

    let a = (&r.x * &r.y).scale(&two_inv);
    let b = r.y.sq();
    let c = r.z.sq();
    let d = &c * 3u8;
    let e = &d * Params::twist_coeff_b();
    let f = &e * 3u8;
    let g = (&b + &f).scale(&two_inv);
    let h = (&r.y + &r.z).sq() - (&b + &c);
    let i = &e - &b;
    let j = r.x.sq();
    let e_sq = e.sq();

    r.x = &a * (&b - &f);
    r.y = g.sq() - (&e_sq * 3u8);
    r.z = &b * &h;

    EllCoeffs {
      ell_0: i.mul_by_xi(),
      ell_vw: -&h,
      ell_vv: &j * 3u8,
    }
  }

  fn add_step(r: &mut G2Hom, qx: &Fq2, qy: &Fq2) -> EllCoeffs {
    let d = &r.x - (qx * &r.z);
    let e = &r.y - (qy * &r.z);
    let f = d.sq();
    let g = e.sq();
    let h = &d * &f;
    let i = &r.x * &f;
    let j = &h + (&r.z * &g) - (&i * 2u8);

    r.x = &d * &j;
    r.y = &e * (&i - &j) - (&h * &r.y);
    r.z = &r.z * &h;

    EllCoeffs {
      ell_0: (&e * qx - &d * qy).mul_by_xi(),
      ell_vw: d,
      ell_vv: -&e,
    }
  }

  // line coefficients consumed by the Miller loop, in consumption order;
  // the last two lines come from Q1 = pi(Q) and Q2 = -pi^2(Q)
  fn precompute_g2(&self, q: &G2Point) -> Vec<EllCoeffs> {
    let q = q.to_affine();
    let qx = &q.x;
    let qy = &q.y;

    let mut r = G2Hom {
      x: qx.clone(),
      y: qy.clone(),
      z: Fq2::one(),
    };
    let mut coeffs = vec![];

    for bit in &self.loop_bits {
      coeffs.push(Pairing::double_step(&mut r));
      if *bit {
        coeffs.push(Pairing::add_step(&mut r, qx, qy));
      }
    }

    let q1x = qx.conj() * Params::twist_mul_by_q_x();
    let q1y = qy.conj() * Params::twist_mul_by_q_y();
    let q2x = q1x.conj() * Params::twist_mul_by_q_x();
    let q2y = -(q1y.conj() * Params::twist_mul_by_q_y());

    coeffs.push(Pairing::add_step(&mut r, &q1x, &q1y));
    coeffs.push(Pairing::add_step(&mut r, &q2x, &q2y));

    coeffs
  }

  fn ell(f: &Fq12, c: &EllCoeffs, px: &Fq1, py: &Fq1) -> Fq12 {
    let line = Fq12::new(
      &Fq6::new(&Fq2::zero(), &c.ell_vw.scale(py), &Fq2::zero()),
      &Fq6::new(&c.ell_vv.scale(px), &Fq2::zero(), &c.ell_0),
    );
    f * line
  }

  pub fn miller_loop(&self, p: &G1Point, q: &G2Point) -> Fq12 {
    if p.is_zero() || q.is_zero() {
      return Fq12::one();
    }
    let p = p.to_affine();
    let px = &p.x;
    let py = &p.y;

    let coeffs = self.precompute_g2(q);
    let mut f = Fq12::one();
    let mut idx = 0;

    for bit in &self.loop_bits {
      f = f.sq();
      f = Pairing::ell(&f, &coeffs[idx], px, py);
      idx += 1;
      if *bit {
        f = Pairing::ell(&f, &coeffs[idx], px, py);
        idx += 1;
      }
    }

    f = Pairing::ell(&f, &coeffs[idx], px, py);
    idx += 1;
    f = Pairing::ell(&f, &coeffs[idx], px, py);

    f
  }

  // x^(-u) on the cyclotomic subgroup, where conj is the inverse
  fn exp_by_neg_u(x: &Fq12) -> Fq12 {
    x.pow(&Params::seed()).conj()
  }

  // f^((q^12 - 1) / r), split into the easy part f^((q^6-1)(q^2+1)) and
  // the hard part along the Fuentes-Castaneda addition chain in u
  pub fn final_exponentiation(&self, f: &Fq12) -> Fq12 {
    // easy part
    let t = &f.conj() * &f.inv();
    let t = &t.frobenius(2) * &t;

    // hard part
    let a = Pairing::exp_by_neg_u(&t);          // t^(-u)
    let b = a.sq();                             // t^(-2u)
    let c = b.sq();                             // t^(-4u)
    let d = &c * &b;                            // t^(-6u)
    let e = Pairing::exp_by_neg_u(&d);          // t^(6u^2)
    let f2 = e.sq();                            // t^(12u^2)
    let g = Pairing::exp_by_neg_u(&f2);         // t^(-12u^3)
    let h = d.conj();                           // t^(6u)
    let i = g.conj();                           // t^(12u^3)
    let j = &i * &e;                            // t^(12u^3 + 6u^2)
    let k = &j * &h;                            // t^(12u^3 + 6u^2 + 6u)
    let l = &k * &b;                            // t^(12u^3 + 6u^2 + 4u)
    let m = &k * &e;                            // t^(12u^3 + 12u^2 + 6u)
    let n = &m * &t;                            // t^(12u^3 + 12u^2 + 6u + 1)
    let o = l.frobenius(1);
    let p = &o * &n;
    let q = k.frobenius(2);
    let r = &q * &p;
    let s = t.conj();                           // t^(-1)
    let t2 = &s * &l;                           // t^(12u^3 + 6u^2 + 4u - 1)
    let u = t2.frobenius(3);
    &u * &r
  }

  // the optimal-ate pairing e: G1 x G2 -> mu_r
  pub fn ate(&self, p: &G1Point, q: &G2Point) -> Fq12 {
    let f = self.miller_loop(p, q);
    self.final_exponentiation(&f)
  }
}

impl Default for Pairing {
  fn default() -> Self {
    Pairing::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pairing_of_generators_is_non_degenerate() {
    let pairing = Pairing::new();
    let e = pairing.ate(&G1Point::g(), &G2Point::g());
    assert!(e != Fq12::one());
  }

  #[test]
  fn pairing_value_has_order_dividing_r() {
    let pairing = Pairing::new();
    let e = pairing.ate(&G1Point::g(), &G2Point::g());
    let r = G1Point::curve_group().order.clone();
    assert_eq!(e.pow(&r), Fq12::one());
  }

  #[test]
  fn pairing_with_infinity_is_one() {
    let pairing = Pairing::new();
    assert_eq!(
      pairing.ate(&G1Point::point_at_infinity(), &G2Point::g()),
      Fq12::one(),
    );
    assert_eq!(
      pairing.ate(&G1Point::g(), &G2Point::point_at_infinity()),
      Fq12::one(),
    );
  }

  // e(aP, bQ) = e(P, Q)^(ab) = e(abP, Q) = e(P, abQ)
  #[test]
  fn bilinearity_over_small_scalars() {
    let pairing = Pairing::new();
    let f = G1Point::curve_group();
    let p = G1Point::g();
    let q = G2Point::g();

    let lhs = pairing.ate(&(&p * &f.elem(&2u8)), &(&q * &f.elem(&3u8)));
    let base = pairing.ate(&p, &q);
    assert_eq!(lhs, base.pow(&BigUint::from(6u8)));
    assert_eq!(lhs, pairing.ate(&(&p * &f.elem(&6u8)), &q));
    assert_eq!(lhs, pairing.ate(&p, &(&q * &f.elem(&6u8))));
  }

  // e(p1 + p2, q) = e(p1, q) * e(p2, q)
  #[test]
  fn additivity_in_first_argument() {
    let pairing = Pairing::new();
    let f = G1Point::curve_group();
    let p1 = G1Point::g();
    let p2 = &p1 * &f.elem(&5u8);
    let q = G2Point::g();

    let lhs = pairing.ate(&(&p1 + &p2), &q);
    let rhs = pairing.ate(&p1, &q) * pairing.ate(&p2, &q);
    assert_eq!(lhs, rhs);
  }
}
