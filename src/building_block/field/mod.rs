pub mod polynomial;
pub mod prime_field;
pub mod prime_field_elem;
