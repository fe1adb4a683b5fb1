use std::sync::Arc;

use bytes::Bytes;

use crate::http::body::UploadSink;
use crate::http::request::Method;

/// Which methods a route accepts.
#[derive(Clone, Copy)]
pub enum MethodFilter {
    /// Any method, including unrecognized ones.
    Any,
    /// Exactly this method.
    Is(Method),
}

impl MethodFilter {
    pub fn matches(&self, method: Method) -> bool {
        match self {
            MethodFilter::Any => true,
            MethodFilter::Is(m) => *m == method,
        }
    }
}

/// The closed set of request handlers routes can dispatch to.
pub enum RouteHandler {
    /// A fixed in-memory body served with the given content type.
    Fixed {
        content_type: &'static str,
        body: Bytes,
    },
    /// Resolve the last path component to a stored file and stream it back;
    /// 404 when no such file exists.
    ServeFile,
    /// Answer 200 up front, then drain the request body into the sink.
    Upload { sink: Arc<dyn UploadSink> },
}

/// One dispatch entry: a path pattern, a method filter and a handler.
///
/// A pattern either matches the path exactly, or, when it ends in `*`,
/// matches any path starting with the part before the `*`.
pub struct Route {
    pattern: &'static str,
    method: MethodFilter,
    handler: RouteHandler,
}

impl Route {
    pub fn new(pattern: &'static str, method: MethodFilter, handler: RouteHandler) -> Self {
        Self {
            pattern,
            method,
            handler,
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn handler(&self) -> &RouteHandler {
        &self.handler
    }

    pub fn matches(&self, path: &str, method: Method) -> bool {
        let exact = self.pattern == path;
        let prefix = self
            .pattern
            .strip_suffix('*')
            .is_some_and(|p| path.starts_with(p));
        (exact || prefix) && self.method.matches(method)
    }
}

/// The ordered route table, supplied once at startup and immutable from
/// then on.
///
/// Dispatch is strictly first-match-wins in registration order; there is no
/// most-specific-prefix rule, so catch-all entries belong last.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Finds the first registered route matching `path` and `method`.
    pub fn find(&self, path: &str, method: Method) -> Option<&Route> {
        self.routes.iter().find(|r| r.matches(path, method))
    }
}
