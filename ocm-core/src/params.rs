//! Query parameters of the collection and object calls
use crate::request::Error;

/// Query parameters for list and search calls
///
/// Only the parameters that are explicitly set end up in the query string.
/// The server applies its own defaults for the rest.
///
/// ```
/// use ocm_core::params::ListParams;
/// let lp = ListParams::default()
///     .page(2)
///     .size(50)
///     .search("product.id = 'rosa'")
///     .order("creation_timestamp desc");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListParams {
    /// Index of the requested page, starting at 1.
    pub page: Option<u32>,

    /// Maximum number of items in the page.
    pub size: Option<u32>,

    /// A search expression in the SQL-like syntax of the API, e.g. `name like 'my%'`.
    pub search: Option<String>,

    /// An ordering expression, e.g. `name asc`.
    pub order: Option<String>,
}

impl ListParams {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.page == Some(0) {
            return Err(Error::Validation("ListParams::page starts at 1".into()));
        }
        if self.size == Some(0) {
            return Err(Error::Validation("ListParams::size must be at least 1".into()));
        }
        Ok(())
    }

    pub(crate) fn populate_qp(&self, qp: &mut form_urlencoded::Serializer<String>) {
        if let Some(page) = &self.page {
            qp.append_pair("page", &page.to_string());
        }
        if let Some(size) = &self.size {
            qp.append_pair("size", &size.to_string());
        }
        if let Some(search) = &self.search {
            qp.append_pair("search", search);
        }
        if let Some(order) = &self.order {
            qp.append_pair("order", order);
        }
    }
}

/// Builder interface to ListParams
impl ListParams {
    /// Request a specific page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Limit the number of items per page
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Filter the collection with a search expression
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Order the collection
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}

/// Query parameters for create calls
#[derive(Default, Clone, Debug, PartialEq)]
pub struct PostParams {
    /// Validate the request without persisting anything
    pub dry_run: bool,
}

impl PostParams {
    pub(crate) fn populate_qp(&self, qp: &mut form_urlencoded::Serializer<String>) {
        if self.dry_run {
            qp.append_pair("dryRun", "true");
        }
    }

    /// Validate without persisting
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// Query parameters for update calls
#[derive(Default, Clone, Debug, PartialEq)]
pub struct PatchParams {
    /// Validate the request without persisting anything
    pub dry_run: bool,
}

impl PatchParams {
    pub(crate) fn populate_qp(&self, qp: &mut form_urlencoded::Serializer<String>) {
        if self.dry_run {
            qp.append_pair("dryRun", "true");
        }
    }

    /// Validate without persisting
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// Query parameters for delete calls
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DeleteParams {
    /// Keep going when cleanup of cloud resources fails
    ///
    /// Resources left behind in the cloud account have to be removed manually.
    pub best_effort: bool,

    /// Validate the request without deleting anything
    pub dry_run: bool,
}

impl DeleteParams {
    pub(crate) fn populate_qp(&self, qp: &mut form_urlencoded::Serializer<String>) {
        if self.best_effort {
            qp.append_pair("best_effort", "true");
        }
        if self.dry_run {
            qp.append_pair("dryRun", "true");
        }
    }

    /// Delete even when cloud resources cannot be cleaned up
    #[must_use]
    pub fn best_effort(mut self) -> Self {
        self.best_effort = true;
        self
    }

    /// Validate without deleting
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}
