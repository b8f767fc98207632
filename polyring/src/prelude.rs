pub use num_traits::One;
pub use num_traits::Zero;

pub use crate::error::PolynomialError;
pub use crate::math::polynomial::Polynomial;
pub use crate::math::prime_field_element::PrimeFieldElement;
pub use crate::math::traits::Coefficient;
pub use crate::math::traits::Inverse;
pub use crate::pfe;
pub use crate::pfe_vec;
