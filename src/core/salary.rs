use crate::domain::model::{HhVacancy, SalaryBounds, SjVacancy, ZeroBoundPolicy};

/// Estimates a salary from a lower/upper bound pair, treating `0` as unspecified.
pub fn estimate(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    SalaryEstimator::default().estimate(SalaryBounds { lower, upper })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryEstimator {
    zero_bound: ZeroBoundPolicy,
}

impl SalaryEstimator {
    pub fn new(zero_bound: ZeroBoundPolicy) -> Self {
        Self { zero_bound }
    }

    // 負數或非有限值一律視為未填
    fn normalize(&self, bound: Option<f64>) -> Option<f64> {
        let value = bound.filter(|v| v.is_finite() && *v >= 0.0)?;
        if value == 0.0 && self.zero_bound == ZeroBoundPolicy::Absent {
            return None;
        }
        Some(value)
    }

    /// Both bounds give their mean, a lone lower bound is raised by 20%,
    /// a lone upper bound is lowered by 20%.
    pub fn estimate(&self, bounds: SalaryBounds) -> Option<f64> {
        match (self.normalize(bounds.lower), self.normalize(bounds.upper)) {
            (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
            (Some(lower), None) => Some(1.2 * lower),
            (None, Some(upper)) => Some(0.8 * upper),
            (None, None) => None,
        }
    }

    /// HeadHunter vacancies count only with a salary block in `currency` (e.g. `RUR`).
    pub fn headhunter(&self, vacancy: &HhVacancy, currency: &str) -> Option<f64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(currency) {
            return None;
        }
        self.estimate(SalaryBounds {
            lower: salary.from,
            upper: salary.to,
        })
    }

    /// SuperJob vacancies count only when paid in `currency` (e.g. `rub`).
    pub fn superjob(&self, vacancy: &SjVacancy, currency: &str) -> Option<f64> {
        if vacancy.currency.as_deref() != Some(currency) {
            return None;
        }
        self.estimate(SalaryBounds {
            lower: vacancy.payment_from,
            upper: vacancy.payment_to,
        })
    }
}
