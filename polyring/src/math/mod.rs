pub mod other;
pub mod polynomial;
pub mod prime_field_element;
pub mod traits;
