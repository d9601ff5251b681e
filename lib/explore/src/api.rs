//! The catalog client facade.

use std::time::Duration;

use url::Url;

use crate::{
    CallResult, ClientConfigBuilder, Executor, HttpClient, HyperClient, Operation,
    QueryParams, RenderedRequest, Result, config::DEFAULT_BASE_URL, middleware::LoggingLayer,
};

/// Client for the Explore v2.1 catalog API.
///
/// One method per catalog operation. Path arguments are plain strings and are
/// percent-encoded as single path segments; optional parameters come from a
/// [`QueryParams`]. Every method resolves to a [`CallResult`].
///
/// # Example
///
/// ```no_run
/// use explore::{CallResult, ExploreClient, QueryParams};
///
/// # async fn run() -> explore::Result<()> {
/// let client = ExploreClient::new()?;
/// let params = QueryParams::new().where_clause("year = 2023").limit(5);
///
/// match client.query_dataset_records("bevoelkerung", &params).await {
///     CallResult::Success(payload) => println!("{}", payload["total_count"]),
///     CallResult::Failure(message) => eprintln!("{message}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExploreClient<C = HyperClient> {
    executor: Executor<C>,
}

impl ExploreClient<HyperClient> {
    /// Client for `https://daten.sg.ch/api/explore/v2.1` with default settings.
    ///
    /// # Errors
    ///
    /// See [`ExploreClientBuilder::build`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> ExploreClientBuilder {
        ExploreClientBuilder::default()
    }
}

impl<C: HttpClient> ExploreClient<C> {
    /// Use a custom transport.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or has no host.
    pub fn with_http_client(client: C, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            executor: Executor::new(client, base_url)?,
        })
    }

    /// Base URL of the API.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.executor.base_url()
    }

    /// The executor behind this client.
    #[must_use]
    pub const fn executor(&self) -> &Executor<C> {
        &self.executor
    }

    /// Render the request `op` would send, without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRequest`] for a wrong number of path
    /// arguments, an undeclared parameter or a parameter of the wrong kind.
    pub fn render(
        &self,
        op: Operation,
        path_args: &[&str],
        params: &QueryParams,
    ) -> Result<RenderedRequest> {
        op.render(path_args, params)
    }

    /// Perform any catalog operation.
    ///
    /// Rendering errors come back as a [`CallResult::Failure`] without a
    /// request being sent.
    pub async fn call(
        &self,
        op: Operation,
        path_args: &[&str],
        params: &QueryParams,
    ) -> CallResult {
        match op.render(path_args, params) {
            Ok(rendered) => self.executor.execute(&rendered).await,
            Err(err) => {
                tracing::warn!(operation = %op, error = %err, "request not rendered");
                err.into()
            }
        }
    }

    /// Search the catalog's datasets (`GET /catalog/datasets`).
    pub async fn get_catalog_datasets(&self, params: &QueryParams) -> CallResult {
        self.call(Operation::GetCatalogDatasets, &[], params).await
    }

    /// List the catalog export formats (`GET /catalog/exports`).
    pub async fn get_catalog_exports(&self) -> CallResult {
        self.call(Operation::GetCatalogExports, &[], &QueryParams::new())
            .await
    }

    /// Export the catalog (`GET /catalog/exports/{format}`).
    pub async fn export_catalog(&self, format: &str, params: &QueryParams) -> CallResult {
        self.call(Operation::ExportCatalog, &[format], params).await
    }

    /// Export the catalog as CSV (`GET /catalog/exports/csv`).
    pub async fn export_catalog_csv(&self, params: &QueryParams) -> CallResult {
        self.call(Operation::ExportCatalogCsv, &[], params).await
    }

    /// Export the catalog as DCAT-AP (`GET /catalog/exports/dcat{dcat_ap_format}`).
    ///
    /// `dcat_ap_format` is glued to `dcat`, e.g. `_ap_ch` gives `dcat_ap_ch`.
    pub async fn export_catalog_dcat(
        &self,
        dcat_ap_format: &str,
        params: &QueryParams,
    ) -> CallResult {
        self.call(Operation::ExportCatalogDcat, &[dcat_ap_format], params)
            .await
    }

    /// Facet values of the catalog (`GET /catalog/facets`).
    pub async fn get_catalog_facets(&self, params: &QueryParams) -> CallResult {
        self.call(Operation::GetCatalogFacets, &[], params).await
    }

    /// Dataset metadata (`GET /catalog/datasets/{dataset_id}`).
    pub async fn get_dataset_info(&self, dataset_id: &str, params: &QueryParams) -> CallResult {
        self.call(Operation::GetDatasetInfo, &[dataset_id], params)
            .await
    }

    /// Query dataset records (`GET /catalog/datasets/{dataset_id}/records`).
    pub async fn query_dataset_records(
        &self,
        dataset_id: &str,
        params: &QueryParams,
    ) -> CallResult {
        self.call(Operation::QueryDatasetRecords, &[dataset_id], params)
            .await
    }

    /// List a dataset's export formats (`GET /catalog/datasets/{dataset_id}/exports`).
    pub async fn get_dataset_exports(&self, dataset_id: &str) -> CallResult {
        self.call(Operation::GetDatasetExports, &[dataset_id], &QueryParams::new())
            .await
    }

    /// Export a dataset (`GET /catalog/datasets/{dataset_id}/exports/{format}`).
    pub async fn export_dataset(
        &self,
        dataset_id: &str,
        format: &str,
        params: &QueryParams,
    ) -> CallResult {
        self.call(Operation::ExportDataset, &[dataset_id, format], params)
            .await
    }

    /// Export a dataset as CSV (`GET /catalog/datasets/{dataset_id}/exports/csv`).
    pub async fn export_dataset_csv(&self, dataset_id: &str, params: &QueryParams) -> CallResult {
        self.call(Operation::ExportDatasetCsv, &[dataset_id], params)
            .await
    }

    /// Facet values of a dataset (`GET /catalog/datasets/{dataset_id}/facets`).
    pub async fn get_dataset_facets(&self, dataset_id: &str, params: &QueryParams) -> CallResult {
        self.call(Operation::GetDatasetFacets, &[dataset_id], params)
            .await
    }

    /// Dataset attachments (`GET /catalog/datasets/{dataset_id}/attachments`).
    pub async fn get_dataset_attachments(&self, dataset_id: &str) -> CallResult {
        self.call(
            Operation::GetDatasetAttachments,
            &[dataset_id],
            &QueryParams::new(),
        )
        .await
    }

    /// One record (`GET /catalog/datasets/{dataset_id}/records/{record_id}`).
    pub async fn get_dataset_record(
        &self,
        dataset_id: &str,
        record_id: &str,
        params: &QueryParams,
    ) -> CallResult {
        self.call(
            Operation::GetDatasetRecord,
            &[dataset_id, record_id],
            params,
        )
        .await
    }
}

/// Builder for [`ExploreClient`].
///
/// ```no_run
/// use std::time::Duration;
/// use explore::ExploreClient;
///
/// let client = ExploreClient::builder()
///     .base_url("https://data.example.org/api/explore/v2.1")
///     .timeout(Duration::from_secs(10))
///     .with_logging()
///     .build()?;
/// # Ok::<(), explore::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ExploreClientBuilder {
    base_url: Option<String>,
    config: ClientConfigBuilder,
    logging: Option<LoggingLayer>,
}

impl ExploreClientBuilder {
    /// API root. Defaults to `https://daten.sg.ch/api/explore/v2.1`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Accept any server certificate. See
    /// [`HyperClientBuilder::danger_accept_invalid_certs`].
    ///
    /// [`HyperClientBuilder::danger_accept_invalid_certs`]:
    ///     crate::HyperClientBuilder::danger_accept_invalid_certs
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config = self.config.validate_certificates(!accept);
        self
    }

    /// Log every transport request at info level.
    #[must_use]
    pub fn with_logging(mut self) -> Self {
        self.logging = Some(LoggingLayer::new());
        self
    }

    /// Log every transport request at debug level, headers included.
    #[must_use]
    pub fn with_debug_logging(mut self) -> Self {
        self.logging = Some(LoggingLayer::debug());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or has no host.
    pub fn build(self) -> Result<ExploreClient> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

        let mut http = HyperClient::builder().config(self.config);
        if let Some(layer) = self.logging {
            http = http.layer(layer);
        }

        ExploreClient::with_http_client(http.build(), base_url)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::Error;

    #[test]
    fn default_client_targets_st_gallen() {
        let client = ExploreClient::new().expect("client");
        check!(client.base_url().as_str() == "https://daten.sg.ch/api/explore/v2.1");
        check!(client.executor().headers()[0].1 == "daten.sg.ch");
        check!(client.executor().client().config().validate_certificates);
    }

    #[test]
    fn builder_settings_reach_the_transport() {
        let client = ExploreClient::builder()
            .base_url("http://localhost:9200/api/explore/v2.1/")
            .timeout(Duration::from_secs(3))
            .danger_accept_invalid_certs(true)
            .with_debug_logging()
            .build()
            .expect("client");

        let config = client.executor().client().config();
        check!(config.timeout == Duration::from_secs(3));
        check!(!config.validate_certificates);
        check!(client.executor().headers()[0].1 == "localhost:9200");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let_assert!(Err(err) = ExploreClient::builder().base_url("not a url").build());
        check!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn render_is_pure() {
        let client = ExploreClient::new().expect("client");
        let params = QueryParams::new().select("name").lang("de");

        let first = client
            .render(Operation::GetDatasetRecord, &["roads", "a/b"], &params)
            .expect("render");
        let second = client
            .render(Operation::GetDatasetRecord, &["roads", "a/b"], &params)
            .expect("render");

        check!(first == second);
        check!(first.path() == "/catalog/datasets/roads/records/a%2Fb");
        check!(first.query() == "?select=name&lang=de");
    }

    #[tokio::test]
    async fn rendering_errors_fail_without_sending() {
        let client = ExploreClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .expect("client");
        let params = QueryParams::new().set("bogus", "x");

        let_assert!(CallResult::Failure(message) = client.get_catalog_facets(&params).await);
        check!(
            message
                == "invalid request: parameter `bogus` is not accepted by `get_catalog_facets`"
        );
    }

    #[tokio::test]
    async fn dot_identifiers_fail_without_sending() {
        let client = ExploreClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .expect("client");

        let outcome = client.get_dataset_info("..", &QueryParams::new()).await;
        let_assert!(CallResult::Failure(message) = outcome);
        check!(message == "invalid request: path `/catalog/datasets/..` contains a dot segment");

        let outcome = client
            .get_dataset_record("roads", ".", &QueryParams::new())
            .await;
        let_assert!(CallResult::Failure(message) = outcome);
        check!(message.starts_with("invalid request: "));
    }
}
