// Module layout (Clean Architecture style)
// - bootstrap: configuration, application shell and lifecycle
// - infrastructure: connection pool and sqlx repositories
// - presentation: HTTP routers, extractors and error responses
// - application: ports, validation and use cases
// - domain: core records

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
