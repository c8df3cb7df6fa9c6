pub mod fq1;
pub mod fq12;
pub mod fq2;
pub mod fq6;
pub mod g1_point;
pub mod g2_point;
pub mod pairing;
pub mod params;
