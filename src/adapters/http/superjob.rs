use crate::adapters::http::pagination::Pages;
use crate::adapters::http::{build_client, get_json};
use crate::config::{StatsConfig, SuperJobSettings};
use crate::core::salary::SalaryEstimator;
use crate::core::{FetchedVacancies, PagedEndpoint, Result, VacancySource};
use crate::domain::model::{SjPage, SjVacancy};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;

pub const SOURCE_NAME: &str = "SuperJob";
const API_KEY_HEADER: &str = "X-Api-App-Id";

pub struct SuperJobClient {
    client: Client,
    settings: SuperJobSettings,
    title: String,
    token: String,
    estimator: SalaryEstimator,
}

impl SuperJobClient {
    pub fn new(
        settings: SuperJobSettings,
        token: String,
        estimator: SalaryEstimator,
        user_agent: &str,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(user_agent)?,
            title: settings.resolved_title(),
            settings,
            token,
            estimator,
        })
    }

    pub fn from_config(config: &StatsConfig) -> Result<Self> {
        let token = validate_required_field("superjob.token", &config.superjob.token)?.clone();
        Self::new(
            config.superjob.clone(),
            token,
            SalaryEstimator::new(config.zero_bound_policy),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl PagedEndpoint for SuperJobClient {
    type Page = SjPage;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<SjPage> {
        let area = self.settings.area.to_string();
        let catalogue = self.settings.catalogue.to_string();
        let keyword_scope = self.settings.keyword_scope.to_string();
        let page_index = page.to_string();

        tracing::debug!("{}: requesting page {} for '{}'", SOURCE_NAME, page, language);

        let request = self
            .client
            .get(&self.settings.base_url)
            .header(API_KEY_HEADER, &self.token)
            .query(&[
                ("t", area.as_str()),
                ("catalogues", catalogue.as_str()),
                ("keywords[0][keys]", language),
                ("keywords[0][srws]", keyword_scope.as_str()),
                ("page", page_index.as_str()),
            ]);

        get_json(SOURCE_NAME, request).await
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Vacancy = SjVacancy;

    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn title(&self) -> &str {
        &self.title
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<FetchedVacancies<SjVacancy>> {
        Pages::new(self, language).collect_all().await
    }

    fn predict_salary(&self, vacancy: &SjVacancy) -> Option<f64> {
        self.estimator.superjob(vacancy, &self.settings.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ZeroBoundPolicy;
    use crate::utils::error::StatsError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(base_url: String, estimator: SalaryEstimator) -> SuperJobClient {
        let settings = SuperJobSettings {
            base_url,
            ..SuperJobSettings::default()
        };
        SuperJobClient::new(settings, "secret-key".to_string(), estimator, "vacancy-stats-test")
            .unwrap()
    }

    fn object(id: u64, currency: &str, from: u64, to: u64) -> serde_json::Value {
        json!({"id": id, "profession": "Developer", "currency": currency, "payment_from": from, "payment_to": to})
    }

    #[tokio::test]
    async fn test_fetches_while_more_is_true() {
        let server = MockServer::start();
        let mocks: Vec<_> = [true, true, false]
            .into_iter()
            .enumerate()
            .map(|(page, more)| {
                let page_index = page.to_string();
                server.mock(|when, then| {
                    when.method(GET)
                        .path("/2.0/vacancies/")
                        .query_param("page", page_index.as_str());
                    then.status(200).json_body(json!({
                        "objects": [object(page as u64, "rub", 50000, 70000)],
                        "total": 3,
                        "more": more
                    }));
                })
            })
            .collect();

        let client = client_for(server.url("/2.0/vacancies/"), SalaryEstimator::default());
        let fetched = client.fetch_vacancies("Python").await.unwrap();

        for mock in &mocks {
            mock.assert();
        }
        assert_eq!(fetched.found, 3);
        let ids: Vec<Option<u64>> = fetched.vacancies.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![Some(0), Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_request_shaping() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2.0/vacancies/")
                .header("x-api-app-id", "secret-key")
                .query_param("t", "4")
                .query_param("catalogues", "48")
                .query_param("keywords[0][keys]", "C++")
                .query_param("keywords[0][srws]", "1")
                .query_param("page", "0");
            then.status(200)
                .json_body(json!({"objects": [], "total": 0, "more": false}));
        });

        let client = client_for(server.url("/2.0/vacancies/"), SalaryEstimator::default());
        let fetched = client.fetch_vacancies("C++").await.unwrap();

        mock.assert();
        assert_eq!(fetched.found, 0);
    }

    #[tokio::test]
    async fn test_unauthorized_is_transport_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(403)
                .json_body(json!({"error": {"code": 403, "message": "Invalid app_key"}}));
        });

        let client = client_for(server.url("/2.0/vacancies/"), SalaryEstimator::default());
        let err = client.fetch_vacancies("Go").await.unwrap_err();

        mock.assert();
        assert!(matches!(err, StatsError::Transport { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = client_for(server.url("/2.0/vacancies/"), SalaryEstimator::default());
        let err = client.fetch_vacancies("Go").await.unwrap_err();

        assert!(matches!(err, StatsError::MalformedResponse { .. }));
    }

    #[test]
    fn test_predict_salary_uses_rub_only() {
        let client = client_for("http://127.0.0.1:9/".to_string(), SalaryEstimator::default());
        let rub: SjVacancy = serde_json::from_value(object(1, "rub", 0, 100000)).unwrap();
        let usd: SjVacancy = serde_json::from_value(object(2, "usd", 1000, 2000)).unwrap();

        assert_eq!(client.predict_salary(&rub), Some(80000.0));
        assert_eq!(client.predict_salary(&usd), None);
    }

    #[test]
    fn test_zero_payment_with_present_policy() {
        let estimator = SalaryEstimator::new(ZeroBoundPolicy::Present);
        let client = client_for("http://127.0.0.1:9/".to_string(), estimator);
        let vacancy: SjVacancy = serde_json::from_value(object(1, "rub", 0, 100000)).unwrap();

        assert_eq!(client.predict_salary(&vacancy), Some(50000.0));
    }

    #[test]
    fn test_from_config_requires_token() {
        let config = StatsConfig::default();
        assert!(matches!(
            SuperJobClient::from_config(&config),
            Err(StatsError::MissingConfigError { .. })
        ));
    }
}
