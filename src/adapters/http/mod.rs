pub mod headhunter;
pub mod pagination;
pub mod superjob;

use crate::utils::error::{Result, StatsError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

pub(crate) fn build_client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// 送出請求並解析 JSON，非 2xx 狀態一律視為失敗
pub(crate) async fn get_json<T: DeserializeOwned>(
    source_name: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();

    tracing::debug!("{} response status: {} ({})", source_name, status, url);

    if !status.is_success() {
        return Err(StatsError::Transport {
            source_name: source_name.to_string(),
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| StatsError::malformed(source_name, e.to_string()))
}
