/// Client-side location, the stand-in for `window.location`.
pub trait Navigator: Send + Sync {
    /// Scheme, host and port the app is served from, without a trailing slash.
    fn origin(&self) -> String;

    /// Path of the current location.
    fn current_path(&self) -> String;

    /// Move to a path on this origin or to an absolute URL.
    fn navigate(&self, target: &str);
}
