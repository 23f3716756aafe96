use std::fmt::Display;

/// Unwraps the result of a fallible constructor or aborts start-up.
///
/// Meant for wiring in `main`; request paths propagate errors instead.
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("initialisation failed: {}", e),
    }
}
