//! Error Types
//!
//! Every failure the engine can surface to the caller of the simulation loop.

use thiserror::Error;

use crate::config::ConfigError;

/// Where a zero divisor was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionSite {
    /// Mean of the rebased wealth values was zero
    GiniMean,
    /// A revolution fired with nobody at or below zero wealth
    RevolutionShare,
}

impl std::fmt::Display for DivisionSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionSite::GiniMean => write!(f, "gini coefficient: rebased mean wealth is zero"),
            DivisionSite::RevolutionShare => {
                write!(f, "revolution share: no have-nots to receive the pool")
            }
        }
    }
}

/// Errors raised while running the simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("division by zero in {0}")]
    DivisionByZero(DivisionSite),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("render error: {0}")]
    Render(#[from] std::io::Error),
}

impl SimError {
    /// True if this is a division-by-zero failure at the given site.
    pub fn is_division_by_zero(&self, site: DivisionSite) -> bool {
        matches!(self, SimError::DivisionByZero(s) if *s == site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::DivisionByZero(DivisionSite::GiniMean);
        assert_eq!(
            err.to_string(),
            "division by zero in gini coefficient: rebased mean wealth is zero"
        );
        assert!(err.is_division_by_zero(DivisionSite::GiniMean));
        assert!(!err.is_division_by_zero(DivisionSite::RevolutionShare));
    }

    #[test]
    fn test_config_error_converts() {
        let err: SimError = ConfigError::InitialWealth(0).into();
        assert!(matches!(err, SimError::Config(ConfigError::InitialWealth(0))));
    }
}
