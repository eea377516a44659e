use crate::adapters::http::pagination::Pages;
use crate::adapters::http::{build_client, get_json};
use crate::config::{HeadHunterSettings, StatsConfig};
use crate::core::salary::SalaryEstimator;
use crate::core::{FetchedVacancies, PagedEndpoint, Result, VacancySource};
use crate::domain::model::{HhPage, HhVacancy};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

pub const SOURCE_NAME: &str = "HeadHunter";

pub struct HeadHunterClient {
    client: Client,
    settings: HeadHunterSettings,
    title: String,
    date_from: NaiveDate,
    estimator: SalaryEstimator,
}

impl HeadHunterClient {
    pub fn new(
        settings: HeadHunterSettings,
        date_from: NaiveDate,
        estimator: SalaryEstimator,
        user_agent: &str,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(user_agent)?,
            title: settings.resolved_title(),
            settings,
            date_from,
            estimator,
        })
    }

    pub fn from_config(config: &StatsConfig, today: NaiveDate) -> Result<Self> {
        Self::new(
            config.headhunter.clone(),
            config.date_from(today),
            SalaryEstimator::new(config.zero_bound_policy),
            &config.user_agent,
        )
    }

    /// Free-text query, e.g. `Программист Python`.
    pub fn search_text(&self, language: &str) -> String {
        let prefix = self.settings.role_prefix.trim();
        if prefix.is_empty() {
            language.to_string()
        } else {
            format!("{} {}", prefix, language)
        }
    }
}

#[async_trait]
impl PagedEndpoint for HeadHunterClient {
    type Page = HhPage;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<HhPage> {
        let text = self.search_text(language);
        let area = self.settings.area.to_string();
        let date_from = self.date_from.format("%Y-%m-%d").to_string();
        let page_index = page.to_string();

        tracing::debug!("{}: requesting page {} for '{}'", SOURCE_NAME, page, text);

        let request = self.client.get(&self.settings.base_url).query(&[
            ("text", text.as_str()),
            ("area", area.as_str()),
            ("date_from", date_from.as_str()),
            ("page", page_index.as_str()),
        ]);

        get_json(SOURCE_NAME, request).await
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Vacancy = HhVacancy;

    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<HhVacancy>> {
        Pages::new(self, language).collect_all().await
    }

    fn predict_salary(&self, vacancy: &HhVacancy) -> Option<f64> {
        self.estimator.headhunter(vacancy, &self.settings.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StatsError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(base_url: String) -> HeadHunterClient {
        let settings = HeadHunterSettings {
            base_url,
            ..HeadHunterSettings::default()
        };
        HeadHunterClient::new(
            settings,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            SalaryEstimator::default(),
            "vacancy-stats-test",
        )
        .unwrap()
    }

    fn item(id: &str, currency: &str, from: u64, to: u64) -> serde_json::Value {
        json!({"id": id, "name": "Developer", "salary": {"currency": currency, "from": from, "to": to, "gross": false}})
    }

    #[tokio::test]
    async fn test_fetches_until_last_page() {
        let server = MockServer::start();
        let mocks: Vec<_> = (0..3)
            .map(|page| {
                let page_index = page.to_string();
                server.mock(|when, then| {
                    when.method(GET)
                        .path("/vacancies/")
                        .query_param("page", page_index.as_str());
                    then.status(200)
                        .header("Content-Type", "application/json")
                        .json_body(json!({
                            "items": [item(&format!("{}", page), "RUR", 100000, 200000)],
                            "found": 25,
                            "pages": 3,
                            "page": page,
                            "per_page": 20
                        }));
                })
            })
            .collect();

        let client = client_for(server.url("/vacancies/"));
        let fetched = client.fetch_vacancies("Go").await.unwrap();

        for mock in &mocks {
            mock.assert();
        }
        assert_eq!(fetched.found, 25);
        let ids: Vec<&str> = fetched
            .vacancies
            .iter()
            .map(|v| v.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[tokio::test]
    async fn test_request_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/vacancies/")
                .query_param("text", "Программист Python")
                .query_param("area", "1")
                .query_param("date_from", "2024-05-01")
                .query_param("page", "0")
                .header("user-agent", "vacancy-stats-test");
            then.status(200)
                .json_body(json!({"items": [], "found": 0, "pages": 0}));
        });

        let client = client_for(server.url("/vacancies/"));
        let fetched = client.fetch_vacancies("Python").await.unwrap();

        mock.assert();
        assert_eq!(fetched.found, 0);
        assert!(fetched.vacancies.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(GET).path("/vacancies/").query_param("page", "0");
            then.status(200)
                .json_body(json!({"items": [], "found": 40, "pages": 2}));
        });
        let second = server.mock(|when, then| {
            when.method(GET).path("/vacancies/").query_param("page", "1");
            then.status(503);
        });

        let client = client_for(server.url("/vacancies/"));
        let err = client.fetch_vacancies("Go").await.unwrap_err();

        first.assert();
        second.assert();
        assert!(matches!(err, StatsError::Transport { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_missing_fields_are_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/vacancies/");
            then.status(200).json_body(json!({"items": []}));
        });

        let client = client_for(server.url("/vacancies/"));
        let err = client.fetch_vacancies("Go").await.unwrap_err();

        assert!(matches!(err, StatsError::MalformedResponse { .. }));
    }

    #[test]
    fn test_predict_salary_uses_rur_only() {
        let client = client_for("http://127.0.0.1:9/vacancies/".to_string());
        let rur: HhVacancy = serde_json::from_value(item("1", "RUR", 100000, 0)).unwrap();
        let usd: HhVacancy = serde_json::from_value(item("2", "USD", 1000, 2000)).unwrap();
        let hidden: HhVacancy = serde_json::from_value(json!({"id": "3", "salary": null})).unwrap();

        assert_eq!(client.predict_salary(&rur), Some(120000.0));
        assert_eq!(client.predict_salary(&usd), None);
        assert_eq!(client.predict_salary(&hidden), None);
    }

    #[test]
    fn test_search_text_without_prefix() {
        let mut client = client_for("http://127.0.0.1:9/vacancies/".to_string());
        client.settings.role_prefix = String::new();
        assert_eq!(client.search_text("Rust"), "Rust");
    }

    #[test]
    fn test_table_title_tracks_area() {
        let settings = HeadHunterSettings {
            area: 2,
            ..HeadHunterSettings::default()
        };
        let client = HeadHunterClient::new(
            settings,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            SalaryEstimator::default(),
            "vacancy-stats-test",
        )
        .unwrap();
        assert_eq!(client.title(), "HeadHunter Saint Petersburg");
    }
}
