//! Multiplier-method settlement estimator.

use serde::Serialize;

use crate::core::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Catastrophic,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Catastrophic => "catastrophic",
        }
    }

    /// (low, high) pain-and-suffering multipliers from the static band table.
    pub fn multipliers(self) -> (f64, f64) {
        tables::SETTLEMENT_MULTIPLIERS
            .iter()
            .find(|(label, _, _)| *label == self.label())
            .map(|&(_, low, high)| (low, high))
            .unwrap_or((1.5, 2.0))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SettlementEstimate {
    pub specials: f64,
    pub low: f64,
    pub high: f64,
}

/// `(medical + lost wages) × severity multiplier + property damage`, as a
/// low/high range.
pub fn estimate(
    medical: f64,
    lost_wages: f64,
    property: f64,
    severity: Severity,
) -> Result<SettlementEstimate, &'static str> {
    if medical < 0.0 || lost_wages < 0.0 || property < 0.0 {
        return Err("damage amounts cannot be negative");
    }
    let specials = medical + lost_wages;
    let (low_mult, high_mult) = severity.multipliers();
    Ok(SettlementEstimate {
        specials,
        low: specials * low_mult + property,
        high: specials * high_mult + property,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_band() {
        let e = estimate(10_000.0, 5_000.0, 2_000.0, Severity::Moderate).unwrap();
        assert_eq!(e.specials, 15_000.0);
        assert_eq!(e.low, 32_000.0);
        assert_eq!(e.high, 47_000.0);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(estimate(-1.0, 0.0, 0.0, Severity::Minor).is_err());
    }

    #[test]
    fn test_bands_cover_all_severities() {
        let severities =
            [Severity::Minor, Severity::Moderate, Severity::Severe, Severity::Catastrophic];
        for s in severities {
            let (low, high) = s.multipliers();
            assert!(low >= 1.5 && high <= 5.0 && low < high);
        }
    }
}
