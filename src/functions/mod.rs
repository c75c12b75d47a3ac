//! HTTP trigger surface
//!
//! Thin handlers over the export and mapping pipelines. Each handler
//! validates its query parameters (400 with the parameter name when a
//! required one is missing), runs the pipeline with request-scoped clients,
//! and maps every internal failure to a generic 500 body while the full
//! detail goes to the server-side log only.

mod export;
mod mappings;

use actix_web::HttpResponse;

pub use export::pvexport;
pub use mappings::pvmappings;

/// Extract a required query parameter, treating empty values as missing
fn require_param<'a>(
    name: &str,
    value: &'a Option<String>,
) -> Result<&'a str, HttpResponse> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => {
            tracing::error!("{name} parameter is required");
            Err(HttpResponse::BadRequest().body(format!("{name} parameter is required")))
        }
    }
}

/// Log an internal failure and answer with a detail-free 500
fn internal_error(err: &impl std::fmt::Display) -> HttpResponse {
    tracing::error!(error = %err, "request failed");
    HttpResponse::InternalServerError().body("An internal error occurred")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param_rejects_empty() {
        assert!(require_param("keywords", &Some(String::new())).is_err());
        assert!(require_param("keywords", &None).is_err());
        assert_eq!(
            require_param("keywords", &Some("abc".to_string())).unwrap(),
            "abc"
        );
    }
}
