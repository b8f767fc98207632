use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PolynomialError {
    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("leading coefficient `{0}` of the divisor has no multiplicative inverse")]
    NonInvertibleLeadingCoefficient(String),
}
