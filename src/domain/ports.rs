use crate::domain::model::{FetchedVacancies, HhPage, HhVacancy, SjPage, SjVacancy, StatsTable};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One page of a paginated vacancy search.
pub trait VacancyPage {
    type Vacancy;

    /// Total number of matches the source declares for the whole query.
    fn found(&self) -> u64;

    /// Whether the page fetched with zero-based index `page` is the last one.
    fn is_last(&self, page: u32) -> bool;

    fn into_vacancies(self) -> Vec<Self::Vacancy>;
}

/// An API that serves vacancy search results one page at a time.
#[async_trait]
pub trait PagedEndpoint: Send + Sync {
    type Page: VacancyPage + Send;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<Self::Page>;
}

/// A job board the statistics are collected from.
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: Send + Sync;

    fn name(&self) -> &str;

    /// Title of the rendered table, e.g. `HeadHunter Moscow`.
    fn title(&self) -> &str;

    async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<Self::Vacancy>>;

    fn predict_salary(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}

pub trait StatsReporter {
    fn render(&self, table: &StatsTable, title: &str) -> String;
}

impl VacancyPage for HhPage {
    type Vacancy = HhVacancy;

    fn found(&self) -> u64 {
        self.found
    }

    // `pages == 0` 代表沒有結果，第一頁即最後一頁
    fn is_last(&self, page: u32) -> bool {
        page.saturating_add(1) >= self.pages
    }

    fn into_vacancies(self) -> Vec<HhVacancy> {
        self.items
    }
}

impl VacancyPage for SjPage {
    type Vacancy = SjVacancy;

    fn found(&self) -> u64 {
        self.total
    }

    fn is_last(&self, _page: u32) -> bool {
        !self.more
    }

    fn into_vacancies(self) -> Vec<SjVacancy> {
        self.objects
    }
}
