//! Request middleware: auth and RBAC gates, CORS, request logging.

pub mod auth;
pub mod cors;
pub mod logging;
pub mod rbac;
