//! The endpoint catalog: every operation of the Explore v2.1 API, its path
//! template and its optional parameters with their per-operation defaults.

use std::fmt;

use crate::{
    Error, Method, ParamSpec, ParameterSet, PathTemplate, QueryParams, RenderedRequest, Result,
    render,
};

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template, relative to the API root.
    pub template: PathTemplate,
    /// Accepted query parameters, in rendering order.
    pub params: &'static [ParamSpec],
}

impl Endpoint {
    /// Declaration of parameter `name`, if this endpoint accepts it.
    #[must_use]
    pub fn spec(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }

    /// Returns `true` if this endpoint accepts parameter `name`.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        self.spec(name).is_some()
    }

    /// Keep the caller's values that differ from their defaults, in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if a parameter is not accepted by
    /// this endpoint or has the wrong kind.
    pub fn parameter_set(&self, params: &QueryParams) -> Result<ParameterSet> {
        for (name, value) in params.iter() {
            let spec = self.spec(name).ok_or_else(|| {
                Error::invalid_request(format!(
                    "parameter `{name}` is not accepted by `{}`",
                    self.name
                ))
            })?;
            if spec.kind() != value.kind() {
                return Err(Error::invalid_request(format!(
                    "parameter `{name}` of `{}` expects {}, got {}",
                    self.name,
                    spec.kind(),
                    value.kind()
                )));
            }
        }

        let mut set = ParameterSet::new();
        for spec in self.params {
            if let Some(value) = params.get(spec.name) {
                set.push(spec, value);
            }
        }
        Ok(set)
    }

    /// Render a request for this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] on an unknown parameter, a kind
    /// mismatch, or a wrong number of path arguments.
    pub fn render(&self, path_args: &[&str], params: &QueryParams) -> Result<RenderedRequest> {
        let set = self.parameter_set(params)?;
        render(self.method, self.template, path_args, &set)
    }
}

// ============================================================================
// Parameter tables
// ============================================================================

const SELECT: ParamSpec = ParamSpec::text("select");
const WHERE: ParamSpec = ParamSpec::text("where");
const ORDER_BY: ParamSpec = ParamSpec::text("order_by");
const GROUP_BY: ParamSpec = ParamSpec::text("group_by");
const REFINE: ParamSpec = ParamSpec::text("refine");
const EXCLUDE: ParamSpec = ParamSpec::text("exclude");
const LANG: ParamSpec = ParamSpec::text("lang");
const TIMEZONE: ParamSpec = ParamSpec::text("timezone");
const FACET: ParamSpec = ParamSpec::text("facet");
const OFFSET: ParamSpec = ParamSpec::integer("offset", 0);
const PAGE_LIMIT: ParamSpec = ParamSpec::integer("limit", 10);
const EXPORT_LIMIT: ParamSpec = ParamSpec::integer("limit", -1);
const INCLUDE_LINKS: ParamSpec = ParamSpec::flag("include_links", false);
const INCLUDE_APP_METAS: ParamSpec = ParamSpec::flag("include_app_metas", false);
const DELIMITER: ParamSpec = ParamSpec::text_or("delimiter", ";");
const LIST_SEPARATOR: ParamSpec = ParamSpec::text_or("list_separator", ",");
const QUOTE_ALL: ParamSpec = ParamSpec::flag("quote_all", false);
const WITH_BOM: ParamSpec = ParamSpec::flag("with_bom", true);

static CATALOG_DATASETS_PARAMS: [ParamSpec; 12] = [
    SELECT,
    WHERE,
    ORDER_BY,
    PAGE_LIMIT,
    OFFSET,
    REFINE,
    EXCLUDE,
    LANG,
    TIMEZONE,
    GROUP_BY,
    INCLUDE_LINKS,
    INCLUDE_APP_METAS,
];

static CATALOG_EXPORT_PARAMS: [ParamSpec; 10] = [
    SELECT,
    WHERE,
    ORDER_BY,
    GROUP_BY,
    EXPORT_LIMIT,
    OFFSET,
    REFINE,
    EXCLUDE,
    LANG,
    TIMEZONE,
];

static CATALOG_CSV_PARAMS: [ParamSpec; 14] = [
    SELECT,
    WHERE,
    ORDER_BY,
    GROUP_BY,
    EXPORT_LIMIT,
    OFFSET,
    REFINE,
    EXCLUDE,
    LANG,
    TIMEZONE,
    DELIMITER,
    LIST_SEPARATOR,
    QUOTE_ALL,
    WITH_BOM,
];

static CATALOG_DCAT_PARAMS: [ParamSpec; 2] = [
    ParamSpec::text("include_exports"),
    ParamSpec::flag("use_labels_in_exports", true),
];

static CATALOG_FACETS_PARAMS: [ParamSpec; 5] = [FACET, REFINE, EXCLUDE, WHERE, TIMEZONE];

static DATASET_INFO_PARAMS: [ParamSpec; 5] =
    [SELECT, LANG, TIMEZONE, INCLUDE_LINKS, INCLUDE_APP_METAS];

static DATASET_RECORDS_PARAMS: [ParamSpec; 12] = [
    SELECT,
    WHERE,
    GROUP_BY,
    ORDER_BY,
    PAGE_LIMIT,
    OFFSET,
    REFINE,
    EXCLUDE,
    LANG,
    TIMEZONE,
    INCLUDE_LINKS,
    INCLUDE_APP_METAS,
];

static DATASET_EXPORT_PARAMS: [ParamSpec; 12] = [
    SELECT,
    WHERE,
    ORDER_BY,
    GROUP_BY,
    EXPORT_LIMIT,
    REFINE,
    EXCLUDE,
    LANG,
    TIMEZONE,
    ParamSpec::flag("use_labels", false),
    ParamSpec::flag("compressed", false),
    ParamSpec::integer("epsg", 4326),
];

static DATASET_CSV_PARAMS: [ParamSpec; 13] = [
    SELECT,
    WHERE,
    ORDER_BY,
    GROUP_BY,
    EXPORT_LIMIT,
    REFINE,
    EXCLUDE,
    LANG,
    TIMEZONE,
    DELIMITER,
    LIST_SEPARATOR,
    QUOTE_ALL,
    WITH_BOM,
];

static DATASET_FACETS_PARAMS: [ParamSpec; 6] = [WHERE, REFINE, EXCLUDE, FACET, LANG, TIMEZONE];

static DATASET_RECORD_PARAMS: [ParamSpec; 3] = [SELECT, LANG, TIMEZONE];

const fn get(
    name: &'static str,
    template: &'static str,
    params: &'static [ParamSpec],
) -> Endpoint {
    Endpoint {
        name,
        method: Method::Get,
        template: PathTemplate::new(template),
        params,
    }
}

static GET_CATALOG_DATASETS: Endpoint = get(
    "get_catalog_datasets",
    "/catalog/datasets",
    &CATALOG_DATASETS_PARAMS,
);
static GET_CATALOG_EXPORTS: Endpoint = get("get_catalog_exports", "/catalog/exports", &[]);
static EXPORT_CATALOG: Endpoint = get(
    "export_catalog",
    "/catalog/exports/{format}",
    &CATALOG_EXPORT_PARAMS,
);
static EXPORT_CATALOG_CSV: Endpoint = get(
    "export_catalog_csv",
    "/catalog/exports/csv",
    &CATALOG_CSV_PARAMS,
);
static EXPORT_CATALOG_DCAT: Endpoint = get(
    "export_catalog_dcat",
    "/catalog/exports/dcat{dcat_ap_format}",
    &CATALOG_DCAT_PARAMS,
);
static GET_CATALOG_FACETS: Endpoint = get(
    "get_catalog_facets",
    "/catalog/facets",
    &CATALOG_FACETS_PARAMS,
);
static GET_DATASET_INFO: Endpoint = get(
    "get_dataset_info",
    "/catalog/datasets/{dataset_id}",
    &DATASET_INFO_PARAMS,
);
static QUERY_DATASET_RECORDS: Endpoint = get(
    "query_dataset_records",
    "/catalog/datasets/{dataset_id}/records",
    &DATASET_RECORDS_PARAMS,
);
static GET_DATASET_EXPORTS: Endpoint = get(
    "get_dataset_exports",
    "/catalog/datasets/{dataset_id}/exports",
    &[],
);
static EXPORT_DATASET: Endpoint = get(
    "export_dataset",
    "/catalog/datasets/{dataset_id}/exports/{format}",
    &DATASET_EXPORT_PARAMS,
);
static EXPORT_DATASET_CSV: Endpoint = get(
    "export_dataset_csv",
    "/catalog/datasets/{dataset_id}/exports/csv",
    &DATASET_CSV_PARAMS,
);
static GET_DATASET_FACETS: Endpoint = get(
    "get_dataset_facets",
    "/catalog/datasets/{dataset_id}/facets",
    &DATASET_FACETS_PARAMS,
);
static GET_DATASET_ATTACHMENTS: Endpoint = get(
    "get_dataset_attachments",
    "/catalog/datasets/{dataset_id}/attachments",
    &[],
);
static GET_DATASET_RECORD: Endpoint = get(
    "get_dataset_record",
    "/catalog/datasets/{dataset_id}/records/{record_id}",
    &DATASET_RECORD_PARAMS,
);

// ============================================================================
// Operations
// ============================================================================

/// A named catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List the datasets of the catalog.
    GetCatalogDatasets,
    /// List the available catalog export formats.
    GetCatalogExports,
    /// Export the catalog in a given format.
    ExportCatalog,
    /// Export the catalog as CSV.
    ExportCatalogCsv,
    /// Export the catalog as DCAT-AP.
    ExportCatalogDcat,
    /// Facet values of the catalog.
    GetCatalogFacets,
    /// Metadata of one dataset.
    GetDatasetInfo,
    /// Query the records of a dataset.
    QueryDatasetRecords,
    /// List the available export formats of a dataset.
    GetDatasetExports,
    /// Export a dataset in a given format.
    ExportDataset,
    /// Export a dataset as CSV.
    ExportDatasetCsv,
    /// Facet values of a dataset.
    GetDatasetFacets,
    /// Attachments of a dataset.
    GetDatasetAttachments,
    /// A single record of a dataset.
    GetDatasetRecord,
}

impl Operation {
    /// Every operation, in catalog order.
    pub const ALL: [Self; 14] = [
        Self::GetCatalogDatasets,
        Self::GetCatalogExports,
        Self::ExportCatalog,
        Self::ExportCatalogCsv,
        Self::ExportCatalogDcat,
        Self::GetCatalogFacets,
        Self::GetDatasetInfo,
        Self::QueryDatasetRecords,
        Self::GetDatasetExports,
        Self::ExportDataset,
        Self::ExportDatasetCsv,
        Self::GetDatasetFacets,
        Self::GetDatasetAttachments,
        Self::GetDatasetRecord,
    ];

    /// The catalog entry of this operation.
    #[must_use]
    pub fn endpoint(self) -> &'static Endpoint {
        match self {
            Self::GetCatalogDatasets => &GET_CATALOG_DATASETS,
            Self::GetCatalogExports => &GET_CATALOG_EXPORTS,
            Self::ExportCatalog => &EXPORT_CATALOG,
            Self::ExportCatalogCsv => &EXPORT_CATALOG_CSV,
            Self::ExportCatalogDcat => &EXPORT_CATALOG_DCAT,
            Self::GetCatalogFacets => &GET_CATALOG_FACETS,
            Self::GetDatasetInfo => &GET_DATASET_INFO,
            Self::QueryDatasetRecords => &QUERY_DATASET_RECORDS,
            Self::GetDatasetExports => &GET_DATASET_EXPORTS,
            Self::ExportDataset => &EXPORT_DATASET,
            Self::ExportDatasetCsv => &EXPORT_DATASET_CSV,
            Self::GetDatasetFacets => &GET_DATASET_FACETS,
            Self::GetDatasetAttachments => &GET_DATASET_ATTACHMENTS,
            Self::GetDatasetRecord => &GET_DATASET_RECORD,
        }
    }

    /// Operation name, e.g. `query_dataset_records`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.endpoint().name
    }

    /// Look an operation up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Render a request for this operation.
    ///
    /// # Errors
    ///
    /// See [`Endpoint::render`].
    pub fn render(self, path_args: &[&str], params: &QueryParams) -> Result<RenderedRequest> {
        self.endpoint().render(path_args, params)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{ParamDefault, ParamValue};

    #[test]
    fn names_match_operations() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("delete_everything"), None);
        assert_eq!(
            Operation::QueryDatasetRecords.to_string(),
            "query_dataset_records"
        );
    }

    #[test]
    fn every_operation_is_get() {
        for op in Operation::ALL {
            assert_eq!(op.endpoint().method, Method::Get, "{op}");
        }
    }

    #[test]
    fn parameter_names_are_unique_per_operation() {
        for op in Operation::ALL {
            let params = op.endpoint().params;
            let names: HashSet<_> = params.iter().map(|spec| spec.name).collect();
            assert_eq!(names.len(), params.len(), "{op}");
        }
    }

    #[test]
    fn limit_defaults_differ_per_operation() {
        let limit = |op: Operation| op.endpoint().spec("limit").map(|spec| spec.default);

        assert_eq!(
            limit(Operation::GetCatalogDatasets),
            Some(ParamDefault::Integer(10))
        );
        assert_eq!(
            limit(Operation::QueryDatasetRecords),
            Some(ParamDefault::Integer(10))
        );
        assert_eq!(
            limit(Operation::ExportCatalog),
            Some(ParamDefault::Integer(-1))
        );
        assert_eq!(
            limit(Operation::ExportCatalogCsv),
            Some(ParamDefault::Integer(-1))
        );
        assert_eq!(
            limit(Operation::ExportDataset),
            Some(ParamDefault::Integer(-1))
        );
        assert_eq!(
            limit(Operation::ExportDatasetCsv),
            Some(ParamDefault::Integer(-1))
        );
        assert_eq!(limit(Operation::GetDatasetRecord), None);
    }

    #[test]
    fn dataset_exports_have_no_offset() {
        assert!(Operation::ExportCatalog.endpoint().accepts("offset"));
        assert!(!Operation::ExportDataset.endpoint().accepts("offset"));
        assert!(!Operation::ExportDatasetCsv.endpoint().accepts("offset"));
    }

    #[test]
    fn parameter_set_follows_declaration_order() {
        let params = QueryParams::new()
            .limit(25)
            .select("")
            .where_clause("speed>30");
        let set = Operation::QueryDatasetRecords
            .endpoint()
            .parameter_set(&params)
            .expect("parameter set");
        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["where", "limit"]);
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let params = QueryParams::new().epsg(2056);
        let err = Operation::GetDatasetRecord
            .render(&["roads", "1"], &params)
            .expect_err("epsg is not a record parameter");
        assert_eq!(
            err.to_string(),
            "invalid request: parameter `epsg` is not accepted by `get_dataset_record`"
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let params = QueryParams::new().set("limit", "ten");
        let err = Operation::GetCatalogDatasets
            .render(&[], &params)
            .expect_err("limit is an integer");
        assert_eq!(
            err.to_string(),
            "invalid request: parameter `limit` of `get_catalog_datasets` expects integer, got text"
        );

        let params = QueryParams::new().set("with_bom", ParamValue::Text("no".into()));
        assert!(Operation::ExportCatalogCsv.render(&[], &params).is_err());
    }
}
