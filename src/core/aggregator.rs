use crate::domain::model::LanguageStats;

/// Folds the salary estimates of one language into its stats.
///
/// Absent estimates are skipped. The average is the mean of the remaining
/// estimates truncated to an integer.
pub fn aggregate<I>(found: u64, estimates: I) -> LanguageStats
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, processed) = estimates
        .into_iter()
        .flatten()
        .fold((0.0_f64, 0_u64), |(sum, count), salary| (sum + salary, count + 1));

    let average_salary = if processed == 0 {
        None
    } else {
        Some((sum / processed as f64).trunc() as u64)
    };

    LanguageStats {
        found,
        processed,
        average_salary,
    }
}
