//! Loan amortization and compound savings projections.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MortgageSummary {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Standard amortized monthly payment: `P·r·(1+r)^n / ((1+r)^n - 1)` with
/// the monthly rate `r = apr / 12 / 100`. A zero rate degenerates to
/// `P / n`.
pub fn monthly_payment(principal: f64, annual_rate: f64, years: u32) -> Result<f64, &'static str> {
    if principal <= 0.0 {
        return Err("the principal must be greater than zero");
    }
    if annual_rate < 0.0 {
        return Err("the interest rate cannot be negative");
    }
    if years == 0 {
        return Err("the term must be at least one year");
    }
    let n = f64::from(years * 12);
    let r = annual_rate / 100.0 / 12.0;
    if r == 0.0 {
        Ok(principal / n)
    } else {
        let growth = (1.0 + r).powf(n);
        Ok(principal * r * growth / (growth - 1.0))
    }
}

pub fn mortgage_summary(
    principal: f64,
    annual_rate: f64,
    years: u32,
) -> Result<MortgageSummary, &'static str> {
    let payment = monthly_payment(principal, annual_rate, years)?;
    let total_paid = payment * f64::from(years * 12);
    Ok(MortgageSummary { monthly_payment: payment, total_paid, total_interest: total_paid - principal })
}

/// Month-by-month breakdown. The final payment is clamped so the balance
/// lands on zero instead of drifting a fraction of a cent negative.
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    years: u32,
) -> Result<Vec<ScheduleRow>, &'static str> {
    let payment = monthly_payment(principal, annual_rate, years)?;
    let r = annual_rate / 100.0 / 12.0;
    let months = years * 12;
    let mut balance = principal;
    let mut rows = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let interest = balance * r;
        let mut toward_principal = payment - interest;
        if toward_principal > balance {
            toward_principal = balance;
        }
        balance -= toward_principal;
        rows.push(ScheduleRow {
            month,
            payment: interest + toward_principal,
            interest,
            principal: toward_principal,
            balance,
        });
    }
    Ok(rows)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SavingsYear {
    pub year: u32,
    pub contributed: f64,
    pub interest: f64,
    pub balance: f64,
}

/// Monthly-compounded growth of an initial deposit plus a fixed end-of-month
/// contribution. Returns one row per year with running totals.
pub fn savings_projection(
    initial: f64,
    monthly: f64,
    annual_rate: f64,
    years: u32,
) -> Result<Vec<SavingsYear>, &'static str> {
    if initial < 0.0 || monthly < 0.0 {
        return Err("deposits cannot be negative");
    }
    if annual_rate < 0.0 {
        return Err("the interest rate cannot be negative");
    }
    if years == 0 {
        return Err("the term must be at least one year");
    }
    let r = annual_rate / 100.0 / 12.0;
    let mut balance = initial;
    let mut contributed = initial;
    let mut interest_total = 0.0;
    let mut rows = Vec::with_capacity(years as usize);
    for year in 1..=years {
        for _ in 0..12 {
            let interest = balance * r;
            interest_total += interest;
            balance += interest + monthly;
            contributed += monthly;
        }
        rows.push(SavingsYear { year, contributed, interest: interest_total, balance });
    }
    Ok(rows)
}
