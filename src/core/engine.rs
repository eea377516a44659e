use crate::core::aggregator::aggregate;
use crate::core::{LanguageStats, Result, StatsReporter, StatsTable, VacancySource};

pub struct StatsEngine {
    languages: Vec<String>,
}

impl StatsEngine {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }

    pub async fn language_stats<S: VacancySource>(
        &self,
        source: &S,
        language: &str,
    ) -> Result<LanguageStats> {
        let fetched = source.fetch_vacancies(language).await?;
        tracing::debug!(
            "{}: fetched {} vacancies for {} (found {})",
            source.name(),
            fetched.vacancies.len(),
            language,
            fetched.found
        );

        let stats = aggregate(
            fetched.found,
            fetched.vacancies.iter().map(|v| source.predict_salary(v)),
        );

        tracing::info!(
            "{}: {} found={} processed={} average={:?}",
            source.name(),
            language,
            stats.found,
            stats.processed,
            stats.average_salary
        );
        Ok(stats)
    }

    /// 依設定順序逐一處理語言，任一語言失敗即中止整張表
    pub async fn collect<S: VacancySource>(&self, source: &S) -> Result<StatsTable> {
        tracing::info!(
            "Collecting {} statistics for {} languages",
            source.name(),
            self.languages.len()
        );

        let mut table = StatsTable::with_capacity(self.languages.len());
        for language in &self.languages {
            let stats = self.language_stats(source, language).await?;
            table.insert(language.clone(), stats);
        }
        Ok(table)
    }

    pub async fn report<S, R>(&self, source: &S, reporter: &R) -> Result<String>
    where
        S: VacancySource,
        R: StatsReporter,
    {
        let table = self.collect(source).await?;
        Ok(reporter.render(&table, source.title()))
    }
}
