//! Quorum head-count calculator.

use serde::Serialize;

use crate::core::error::CalcError;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuorumResult {
    pub members: u64,
    pub percent: f64,
    pub required: u64,
    pub attending: Option<u64>,
    pub met: Option<bool>,
}

/// Required head-count, rounded up. An out-of-range percentage is a hard
/// validation error here, not an inline "cannot compute" value like the
/// other tools produce.
pub fn required_quorum(members: u64, percent: f64) -> Result<u64, CalcError> {
    if members == 0 {
        return Err(CalcError::invalid_input("the member count must be greater than zero"));
    }
    if !(percent > 0.0 && percent <= 100.0) {
        return Err(CalcError::invalid_input(
            "the quorum percentage must be greater than 0 and at most 100",
        ));
    }
    Ok((members as f64 * percent / 100.0).ceil() as u64)
}

pub fn check(members: u64, percent: f64, attending: Option<u64>) -> Result<QuorumResult, CalcError> {
    let required = required_quorum(members, percent)?;
    Ok(QuorumResult {
        members,
        percent,
        required,
        attending,
        met: attending.map(|a| a >= required),
    })
}
