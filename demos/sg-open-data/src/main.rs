//! St. Gallen open data example
//!
//! Lists datasets of the St. Gallen catalog and pages lazily through the
//! records of one of them.
//!
//! ```text
//! cargo run -p sg-open-data-example -- <dataset_id>
//! ```

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use explore::prelude::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// ============================================================================
// Data Types
// ============================================================================

/// One page of `get_catalog_datasets`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetPage {
    pub total_count: u64,
    #[serde(default)]
    pub results: Vec<DatasetSummary>,
}

/// A dataset as listed in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSummary {
    pub dataset_id: String,
    #[serde(default)]
    pub metas: Option<serde_json::Value>,
}

impl DatasetSummary {
    /// Title from the default metadata template, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.metas.as_ref()?.get("default")?.get("title")?.as_str()
    }
}

/// One page of `query_dataset_records`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    pub total_count: u64,
    #[serde(default)]
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Turn a call outcome into a typed payload.
pub fn decode<T: DeserializeOwned>(result: CallResult) -> std::result::Result<T, String> {
    let payload = result.into_result()?;
    serde_json::from_value(payload).map_err(|err| format!("unexpected payload: {err}"))
}

// ============================================================================
// Lazy Record Pager
// ============================================================================

/// Fetches the records of a dataset one page at a time.
pub struct LazyRecords<'a> {
    client: &'a ExploreClient,
    dataset_id: String,
    filter: Option<String>,
    page_size: i64,
    offset: i64,
    total: Option<u64>,
    buffer: std::vec::IntoIter<serde_json::Map<String, serde_json::Value>>,
}

impl<'a> LazyRecords<'a> {
    /// Start paging `dataset_id`, `page_size` records per request.
    pub fn new(client: &'a ExploreClient, dataset_id: impl Into<String>, page_size: i64) -> Self {
        Self {
            client,
            dataset_id: dataset_id.into(),
            filter: None,
            page_size,
            offset: 0,
            total: None,
            buffer: Vec::new().into_iter(),
        }
    }

    /// Only records matching an ODSQL `where` expression.
    #[must_use]
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Total number of matching records, known after the first fetch.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Next record, fetching another page when the current one is used up.
    pub async fn next_record(
        &mut self,
    ) -> std::result::Result<Option<serde_json::Map<String, serde_json::Value>>, String> {
        if let Some(record) = self.buffer.next() {
            return Ok(Some(record));
        }

        let fetched = u64::try_from(self.offset).unwrap_or_default();
        if self.total.is_some_and(|total| fetched >= total) {
            return Ok(None);
        }

        let mut params = QueryParams::new().limit(self.page_size).offset(self.offset);
        if let Some(filter) = &self.filter {
            params = params.where_clause(filter.clone());
        }

        let page: RecordPage =
            decode(self.client.query_dataset_records(&self.dataset_id, &params).await)?;
        self.total = Some(page.total_count);
        self.offset += self.page_size;
        self.buffer = page.results.into_iter();

        Ok(self.buffer.next())
    }
}

// ============================================================================
// Main: Demonstrate usage
// ============================================================================

#[tokio::main]
async fn main() -> explore::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut builder = ExploreClient::builder().with_logging();
    if let Ok(base_url) = std::env::var("EXPLORE_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;
    println!("Explore client for {}", client.base_url());

    let params = QueryParams::new().limit(5).order_by("modified desc");
    match decode::<DatasetPage>(client.get_catalog_datasets(&params).await) {
        Ok(page) => {
            println!("\n=== {} datasets, latest 5 ===", page.total_count);
            for dataset in &page.results {
                println!(
                    "{:<40} {}",
                    dataset.dataset_id,
                    dataset.title().unwrap_or("-")
                );
            }
        }
        Err(message) => eprintln!("catalog listing failed: {message}"),
    }

    let Some(dataset_id) = std::env::args().nth(1) else {
        println!("\nPass a dataset id to page through its records.");
        return Ok(());
    };

    println!("\n=== first 20 records of {dataset_id} ===");
    let mut records = LazyRecords::new(&client, dataset_id, 10);
    for _ in 0..20 {
        match records.next_record().await {
            Ok(Some(record)) => println!("{}", serde_json::Value::Object(record)),
            Ok(None) => break,
            Err(message) => {
                eprintln!("record query failed: {message}");
                break;
            }
        }
    }
    if let Some(total) = records.total() {
        println!("({total} records in total)");
    }

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param, query_param_is_missing},
    };

    const RECORDS: &str = "/api/explore/v2.1/catalog/datasets/einwohner/records";

    fn client_for(server: &MockServer) -> ExploreClient {
        ExploreClient::builder()
            .base_url(format!("{}/api/explore/v2.1", server.uri()))
            .build()
            .expect("client")
    }

    fn records(range: std::ops::RangeInclusive<u64>) -> serde_json::Value {
        range.map(|id| json!({"id": id})).collect()
    }

    #[tokio::test]
    async fn test_dataset_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/explore/v2.1/catalog/datasets"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 2,
                "results": [
                    {"dataset_id": "einwohner", "metas": {"default": {"title": "Einwohner"}}},
                    {"dataset_id": "parkplaetze"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let page: DatasetPage =
            decode(client.get_catalog_datasets(&QueryParams::new().limit(5)).await)
                .expect("page");

        assert_eq!(page.total_count, 2);
        assert_eq!(page.results[0].title(), Some("Einwohner"));
        assert_eq!(page.results[1].title(), None);
    }

    #[tokio::test]
    async fn test_decode_keeps_failure_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/explore/v2.1/catalog/datasets"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = decode::<DatasetPage>(client.get_catalog_datasets(&QueryParams::new()).await)
            .expect_err("server error");

        assert_eq!(err, "HTTP Error: 500");
    }

    #[tokio::test]
    async fn test_lazy_records() {
        let server = MockServer::start().await;

        // Most specific mocks first
        Mock::given(method("GET"))
            .and(path(RECORDS))
            .and(query_param("offset", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 5,
                "results": records(5..=5)
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(RECORDS))
            .and(query_param("offset", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 5,
                "results": records(3..=4)
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(RECORDS))
            .and(query_param("limit", "2"))
            .and(query_param("where", "jahr = 2024"))
            .and(query_param_is_missing("offset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 5,
                "results": records(1..=2)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut pager = LazyRecords::new(&client, "einwohner", 2).filter("jahr = 2024");

        let mut ids = Vec::new();
        while let Some(record) = pager.next_record().await.expect("record") {
            ids.push(record["id"].as_u64().expect("id"));
        }

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(pager.total(), Some(5));
    }
}
