pub mod circuit;
pub mod proof;
pub mod prover;
pub mod qap;
pub mod r1cs;
pub mod serialize;
pub mod setup;
pub mod verifier;
