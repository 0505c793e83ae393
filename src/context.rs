use crate::headers::append_unique;
use std::future::Future;
use std::pin::Pin;

/// Read-only access to the inbound request headers.
///
/// Implementations must match `name` case-insensitively.
pub trait RequestView: Sync {
    fn header(&self, name: &str) -> Option<&str>;
}

/// Mutable access to the outbound response.
pub trait ResponseView: Send {
    fn header(&self, name: &str) -> Option<&str>;

    /// Sets `name` to `value`, or removes it when `value` is `None`.
    fn set_header(&mut self, name: &str, value: Option<String>);

    /// Terminates the response with `status` and an empty body.
    fn end(&mut self, status: u16);

    /// Adds `token` to a comma-separated header unless it is already listed.
    fn append_unique(&mut self, name: &str, token: &str) {
        let merged = append_unique(self.header(name), token);
        if !merged.is_empty() {
            self.set_header(name, Some(merged));
        }
    }
}

/// Boxed, sendable future returned by pipeline handlers and async predicates.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
