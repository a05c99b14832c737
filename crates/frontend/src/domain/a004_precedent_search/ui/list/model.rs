use crate::shared::api_utils::api_url;
use contracts::domain::a004_precedent_search::{SearchQuery, SearchResponse};
use gloo_net::http::Request;

pub async fn search_precedents(query: &SearchQuery) -> Result<SearchResponse, String> {
    let url = api_url(&format!("/api/legal/search?{}", query.to_query_string()));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<SearchResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
