use crate::core::{FetchedVacancies, PagedEndpoint, Result, VacancyPage};

type VacancyOf<E> = <<E as PagedEndpoint>::Page as VacancyPage>::Vacancy;

/// Lazy cursor over the result pages of one search.
///
/// Pages are requested one at a time, starting from index 0, until the page
/// reports itself as the last one. A failed request ends the cursor.
pub struct Pages<'a, E: PagedEndpoint> {
    endpoint: &'a E,
    language: &'a str,
    next: u32,
    finished: bool,
}

impl<'a, E: PagedEndpoint> Pages<'a, E> {
    pub fn new(endpoint: &'a E, language: &'a str) -> Self {
        Self {
            endpoint,
            language,
            next: 0,
            finished: false,
        }
    }

    pub async fn next_page(&mut self) -> Result<Option<E::Page>> {
        if self.finished {
            return Ok(None);
        }

        let index = self.next;
        let page = match self.endpoint.fetch_page(self.language, index).await {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };

        self.finished = page.is_last(index);
        self.next = index.saturating_add(1);
        Ok(Some(page))
    }

    /// 取完所有頁面，`found` 取最後一頁回報的總數
    pub async fn collect_all(mut self) -> Result<FetchedVacancies<VacancyOf<E>>> {
        let mut found = 0;
        let mut vacancies = Vec::new();

        while let Some(page) = self.next_page().await? {
            found = page.found();
            vacancies.extend(page.into_vacancies());
        }

        tracing::debug!(
            "Fetched {} pages ({} vacancies) for {}",
            self.next,
            vacancies.len(),
            self.language
        );
        Ok(FetchedVacancies { found, vacancies })
    }
}
