use axum::{
    Router,
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
};

use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::method_not_allowed;

/// One `(method, path) -> handler` entry.
#[derive(Clone)]
pub struct RouteBinding {
    pub method: Method,
    pub path: String,
    handler: MethodRouter<AppContext>,
}

impl std::fmt::Debug for RouteBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteBinding")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

/// A named group of routes sharing a path prefix and documentation tag.
///
/// Built without any application state so each resource can be constructed
/// and inspected on its own; handlers receive [`AppContext`] once the
/// application assembles its router.
pub struct ResourceRouter {
    name: &'static str,
    prefix: &'static str,
    tag: &'static str,
    bindings: Vec<RouteBinding>,
}

impl ResourceRouter {
    pub fn new(name: &'static str, prefix: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            prefix,
            tag,
            bindings: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    pub fn into_bindings(self) -> Vec<RouteBinding> {
        self.bindings
    }

    pub fn get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppContext>,
        T: 'static,
    {
        self.bind(Method::GET, path, routing::get(handler))
    }

    pub fn post<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppContext>,
        T: 'static,
    {
        self.bind(Method::POST, path, routing::post(handler))
    }

    pub fn put<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppContext>,
        T: 'static,
    {
        self.bind(Method::PUT, path, routing::put(handler))
    }

    pub fn delete<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppContext>,
        T: 'static,
    {
        self.bind(Method::DELETE, path, routing::delete(handler))
    }

    fn bind(mut self, method: Method, path: &str, handler: MethodRouter<AppContext>) -> Self {
        let path = join_path(self.prefix, path);
        self.bindings.push(RouteBinding {
            method,
            path,
            handler,
        });
        self
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    match (prefix.is_empty(), path.is_empty() || path == "/") {
        (true, true) => "/".to_string(),
        (true, false) => path.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}{path}"),
    }
}

/// Ordered dispatch table. A later binding for the same method and path
/// replaces the earlier one in place.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    /// Returns the binding that was replaced, if any.
    pub fn insert(&mut self, binding: RouteBinding) -> Option<RouteBinding> {
        match self
            .bindings
            .iter_mut()
            .find(|b| b.method == binding.method && b.path == binding.path)
        {
            Some(slot) => Some(std::mem::replace(slot, binding)),
            None => {
                self.bindings.push(binding);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.bindings
            .iter()
            .any(|b| &b.method == method && b.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteBinding> {
        self.bindings.iter()
    }

    pub fn to_router(&self) -> Router<AppContext> {
        // Group by path first; axum wants one method router per path.
        let mut grouped: Vec<(&str, MethodRouter<AppContext>)> = Vec::new();
        for b in &self.bindings {
            match grouped.iter_mut().find(|(p, _)| *p == b.path) {
                Some((_, mr)) => *mr = mr.clone().merge(b.handler.clone()),
                None => grouped.push((b.path.as_str(), b.handler.clone())),
            }
        }
        grouped.into_iter().fold(Router::new(), |router, (path, mr)| {
            router.route(path, mr.fallback(method_not_allowed))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn first() -> &'static str {
        "first"
    }

    async fn second() -> &'static str {
        "second"
    }

    #[test]
    fn paths_are_joined_under_the_prefix() {
        assert_eq!(join_path("", "/"), "/");
        assert_eq!(join_path("/genders", ""), "/genders");
        assert_eq!(join_path("/genders/", "/:id"), "/genders/:id");
        assert_eq!(join_path("", "/health"), "/health");
    }

    #[test]
    fn routers_record_their_bindings() {
        let r = ResourceRouter::new("demo", "/demo", "Demo")
            .get("", first)
            .post("", first)
            .delete("/:id", second);
        let keys: Vec<(Method, &str)> = r
            .bindings()
            .iter()
            .map(|b| (b.method.clone(), b.path.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Method::GET, "/demo"),
                (Method::POST, "/demo"),
                (Method::DELETE, "/demo/:id"),
            ]
        );
    }

    #[test]
    fn duplicate_bindings_replace_in_place() {
        let mut table = RouteTable::default();
        for b in ResourceRouter::new("a", "/x", "A")
            .get("", first)
            .put("", first)
            .into_bindings()
        {
            assert!(table.insert(b).is_none());
        }
        let replaced: Vec<_> = ResourceRouter::new("b", "/x", "B")
            .get("", second)
            .into_bindings()
            .into_iter()
            .filter_map(|b| table.insert(b))
            .collect();
        assert_eq!(replaced.len(), 1);
        assert_eq!(table.len(), 2);
        assert!(table.contains(&Method::GET, "/x"));
        assert!(table.contains(&Method::PUT, "/x"));
    }
}
