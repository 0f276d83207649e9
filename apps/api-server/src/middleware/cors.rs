//! CORS policy.

use actix_cors::Cors;

/// Fully open CORS: any origin, method and header.
///
/// Credentials are allowed, so the request's `Origin` is echoed back rather
/// than answered with a wildcard.
pub fn open_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
