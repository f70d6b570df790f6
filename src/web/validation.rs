use super::WebError;

/// Parses a path id. Anything that is not a positive integer is treated as a
/// missing row rather than a bad request.
pub fn parse_id(resource: &str, raw: &str) -> Result<i32, WebError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(WebError::not_found(resource, raw)),
    }
}
