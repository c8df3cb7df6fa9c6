pub mod curves;
pub mod field;
pub mod random_number;
pub mod to_bigint;
pub mod to_biguint;
pub mod zero;
