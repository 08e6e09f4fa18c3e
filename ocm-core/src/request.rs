//! Request builder type for arbitrary api types
use thiserror::Error;

use super::params::{DeleteParams, ListParams, PatchParams, PostParams};
use crate::resource::object_path;

pub(crate) const JSON_MIME: &str = "application/json";

/// Header carrying the user a privileged caller acts on behalf of.
pub const IMPERSONATE_USER: &str = "Impersonate-User";

/// Possible errors when building a request.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to build a request.
    #[error("failed to build request: {0}")]
    BuildRequest(#[source] http::Error),

    /// Failed to validate request.
    #[error("failed to validate request: {0}")]
    Validation(String),
}

/// A clusters-management request builder
///
/// Takes a collection path and supplies constructors for common operations.
/// Every constructor returns an [`http::Request`] relative to the API server.
#[derive(Debug, Clone)]
pub struct Request {
    /// The path component of a url
    pub url_path: String,

    /// User to impersonate, sent in the `Impersonate-User` header
    pub impersonate: Option<String>,
}

impl Request {
    /// New request with a collection's url path
    pub fn new<S: Into<String>>(url_path: S) -> Self {
        Self {
            url_path: url_path.into(),
            impersonate: None,
        }
    }

    /// Send every request built from this one on behalf of `user`
    #[must_use]
    pub fn impersonate(mut self, user: impl Into<String>) -> Self {
        self.impersonate = Some(user.into());
        self
    }

    fn builder(&self, method: http::Method, uri: String) -> http::request::Builder {
        let builder = http::Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::ACCEPT, JSON_MIME);
        match &self.impersonate {
            Some(user) => builder.header(IMPERSONATE_USER, user.as_str()),
            None => builder,
        }
    }

    fn with_body(builder: http::request::Builder, data: Vec<u8>) -> Result<http::Request<Vec<u8>>, Error> {
        let builder = if data.is_empty() {
            builder
        } else {
            builder.header(http::header::CONTENT_TYPE, JSON_MIME)
        };
        builder.body(data).map_err(Error::BuildRequest)
    }
}

// Append the query string only when a parameter was set.
fn join_query(path: String, qp: &mut form_urlencoded::Serializer<String>) -> String {
    let query = qp.finish();
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

fn query() -> form_urlencoded::Serializer<'static, String> {
    form_urlencoded::Serializer::new(String::new())
}

/// Convenience methods found from API conventions
impl Request {
    /// List a collection
    pub fn list(&self, lp: &ListParams) -> Result<http::Request<Vec<u8>>, Error> {
        lp.validate()?;
        let mut qp = query();
        lp.populate_qp(&mut qp);
        let urlstr = join_query(self.url_path.clone(), &mut qp);
        self.builder(http::Method::GET, urlstr)
            .body(vec![])
            .map_err(Error::BuildRequest)
    }

    /// Get a single object
    pub fn get(&self, id: &str) -> Result<http::Request<Vec<u8>>, Error> {
        let urlstr = object_path(&self.url_path, id);
        self.builder(http::Method::GET, urlstr)
            .body(vec![])
            .map_err(Error::BuildRequest)
    }

    /// Add an object to the collection
    pub fn create(&self, pp: &PostParams, data: Vec<u8>) -> Result<http::Request<Vec<u8>>, Error> {
        let mut qp = query();
        pp.populate_qp(&mut qp);
        let urlstr = join_query(self.url_path.clone(), &mut qp);
        Self::with_body(self.builder(http::Method::POST, urlstr), data)
    }

    /// Update attributes of an object
    ///
    /// Attributes absent from `data` are left untouched by the server.
    pub fn update(&self, id: &str, pp: &PatchParams, data: Vec<u8>) -> Result<http::Request<Vec<u8>>, Error> {
        let mut qp = query();
        pp.populate_qp(&mut qp);
        let urlstr = join_query(object_path(&self.url_path, id), &mut qp);
        Self::with_body(self.builder(http::Method::PATCH, urlstr), data)
    }

    /// Delete an object
    pub fn delete(&self, id: &str, dp: &DeleteParams) -> Result<http::Request<Vec<u8>>, Error> {
        let mut qp = query();
        dp.populate_qp(&mut qp);
        let urlstr = join_query(object_path(&self.url_path, id), &mut qp);
        self.builder(http::Method::DELETE, urlstr)
            .body(vec![])
            .map_err(Error::BuildRequest)
    }
}

/// Subresources
impl Request {
    /// Get a subresource of an object
    pub fn get_subresource(&self, subresource_name: &str, id: &str) -> Result<http::Request<Vec<u8>>, Error> {
        let urlstr = format!("{}/{}", object_path(&self.url_path, id), subresource_name);
        self.builder(http::Method::GET, urlstr)
            .body(vec![])
            .map_err(Error::BuildRequest)
    }

    /// Update a subresource of an object
    pub fn update_subresource(
        &self,
        subresource_name: &str,
        id: &str,
        data: Vec<u8>,
    ) -> Result<http::Request<Vec<u8>>, Error> {
        let urlstr = format!("{}/{}", object_path(&self.url_path, id), subresource_name);
        Self::with_body(self.builder(http::Method::PATCH, urlstr), data)
    }

    /// Invoke an action on an object
    pub fn post_subresource(
        &self,
        subresource_name: &str,
        id: &str,
        data: Vec<u8>,
    ) -> Result<http::Request<Vec<u8>>, Error> {
        let urlstr = format!("{}/{}", object_path(&self.url_path, id), subresource_name);
        Self::with_body(self.builder(http::Method::POST, urlstr), data)
    }
}
