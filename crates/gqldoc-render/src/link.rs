use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use url::Url;

use crate::{error::SchemaError, types::TypeDescriptor};

/// Query-string prefix that asks the docs page to print a type.
pub const PRINT_TYPE_QUERY: &str = "?page=printType:";

/// Base URL used when the host doesn't provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// The location type pages are served from.
///
/// Built from the host page's own URL. Any query string (including a
/// previous `?page=...` selection) and fragment are dropped, as are trailing
/// slashes, so every page of the same docs site yields the same base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBase {
    base: String,
}

impl PageBase {
    pub fn parse(raw: &str) -> Result<Self, SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };
        let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                url.scheme()
            )));
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The documentation page for `type_name`.
    pub fn page_url(&self, type_name: &str) -> String {
        format!("{}/{PRINT_TYPE_QUERY}{type_name}", self.base)
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }
}

impl FromStr for PageBase {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for PageBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

/// A reference to a type as it appears in rendered markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeLink<'a> {
    /// The type has its own page.
    Linked { name: &'a str, url: String },
    /// Nothing to link to: the type is unknown, or its name is ambiguous.
    Plain { name: &'a str },
}

impl<'a> TypeLink<'a> {
    pub const fn name(&self) -> &'a str {
        match self {
            TypeLink::Linked { name, .. } | TypeLink::Plain { name } => *name,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TypeLink::Linked { url, .. } => Some(url.as_str()),
            TypeLink::Plain { .. } => None,
        }
    }
}

impl Display for TypeLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeLink::Linked { name, url } => write!(f, "[`{name}`]({url})"),
            TypeLink::Plain { name } => write!(f, "`{name}`"),
        }
    }
}

/// Link `type_name` to its page when exactly one type in `all_types` has
/// that name.
pub fn build_type_link<'a>(
    type_name: &'a str,
    all_types: &[TypeDescriptor],
    page_base: &PageBase,
) -> TypeLink<'a> {
    match all_types
        .iter()
        .filter(|ty| ty.name() == type_name)
        .exactly_one()
    {
        Ok(ty) => TypeLink::Linked {
            name: type_name,
            url: page_base.page_url(ty.name()),
        },
        Err(matches) => {
            tracing::debug!(type_name, matches = matches.count(), "not linking type");
            TypeLink::Plain { name: type_name }
        }
    }
}
