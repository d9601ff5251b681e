//! Caller-facing optional parameters.
//!
//! # Example
//!
//! ```
//! use explore_core::QueryParams;
//!
//! let params = QueryParams::new()
//!     .where_clause("speed > 30")
//!     .limit(25)
//!     .include_links(true);
//! assert_eq!(params.len(), 3);
//! ```

use std::collections::BTreeMap;

use crate::ParamValue;

/// Optional parameters for a catalog operation.
///
/// Each setter stores a value under the parameter's wire name. Which of them
/// are accepted, and which are dropped because they equal the default, is
/// decided by the operation's [`Endpoint`](crate::Endpoint).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, ParamValue>,
}

macro_rules! text_setters {
    ($($(#[$doc:meta])* $method:ident => $name:literal;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $method(self, value: impl Into<String>) -> Self {
                self.set($name, ParamValue::Text(value.into()))
            }
        )*
    };
}

macro_rules! flag_setters {
    ($($(#[$doc:meta])* $method:ident => $name:literal;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $method(self, value: bool) -> Self {
                self.set($name, ParamValue::Boolean(value))
            }
        )*
    };
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter by wire name. The last value set for a name wins.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Value stored for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Number of parameters set, defaults and empties included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    text_setters! {
        /// Fields to return (ODSQL `select` clause).
        select => "select";
        /// Filter expression, sent as `where`.
        where_clause => "where";
        /// Sort expression.
        order_by => "order_by";
        /// Grouping expression.
        group_by => "group_by";
        /// Facet refinement, e.g. `modified:2023`.
        refine => "refine";
        /// Facet exclusion.
        exclude => "exclude";
        /// Language for formatted values.
        lang => "lang";
        /// Timezone applied to datetime fields.
        timezone => "timezone";
        /// CSV field delimiter.
        delimiter => "delimiter";
        /// CSV separator for multi-valued fields.
        list_separator => "list_separator";
        /// Export formats listed in a DCAT export.
        include_exports => "include_exports";
        /// Facet to compute.
        facet => "facet";
    }

    flag_setters! {
        /// Include HATEOAS links.
        include_links => "include_links";
        /// Include application metadata.
        include_app_metas => "include_app_metas";
        /// Quote every CSV field.
        quote_all => "quote_all";
        /// Prefix CSV output with a byte order mark.
        with_bom => "with_bom";
        /// Use field labels instead of names in DCAT exports.
        use_labels_in_exports => "use_labels_in_exports";
        /// Use field labels instead of names in exports.
        use_labels => "use_labels";
        /// Compress the export.
        compressed => "compressed";
    }

    /// Maximum number of items; `-1` means unbounded on export operations.
    #[must_use]
    pub fn limit(self, value: i64) -> Self {
        self.set("limit", ParamValue::Integer(value))
    }

    /// Index of the first item.
    #[must_use]
    pub fn offset(self, value: i64) -> Self {
        self.set("offset", ParamValue::Integer(value))
    }

    /// Coordinate reference system of geographic exports.
    #[must_use]
    pub fn epsg(self, value: i64) -> Self {
        self.set("epsg", ParamValue::Integer(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_use_wire_names() {
        let params = QueryParams::new()
            .where_clause("speed>30")
            .limit(25)
            .with_bom(false);

        assert_eq!(
            params.get("where"),
            Some(&ParamValue::Text("speed>30".to_string()))
        );
        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(25)));
        assert_eq!(params.get("with_bom"), Some(&ParamValue::Boolean(false)));
        assert_eq!(params.get("select"), None);
    }

    #[test]
    fn last_value_wins() {
        let params = QueryParams::new().limit(5).limit(50);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(50)));
    }

    #[test]
    fn generic_setter() {
        let params = QueryParams::new().set("epsg", 2056_i64).set("lang", "de");
        assert_eq!(params.get("epsg"), Some(&ParamValue::Integer(2056)));
        assert_eq!(params.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["epsg", "lang"]);
    }
}
