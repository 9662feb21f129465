//! Server roots, preference keys, and limits shared across the workspace.

/// Periscope version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default server root for the production environment.
pub const SERVER_PROD: &str = "https://settings.prod.svc.periscope.dev";

/// Default server root for the staging environment.
pub const SERVER_STAGE: &str = "https://settings.stage.svc.periscope.dev";

/// Default server root for the development environment.
pub const SERVER_DEV: &str = "https://settings.dev.svc.periscope.dev";

/// Default server root for a locally running settings server.
pub const SERVER_LOCAL: &str = "http://localhost:8888";

/// Push broker endpoint used when pointing at staging.
pub const PUSH_STAGE: &str = "wss://push.stage.svc.periscope.dev";

/// Preference key holding the active server root.
pub const PREF_SERVER: &str = "settings.server";

/// Preference key holding the preview-mode flag.
pub const PREF_PREVIEW_ENABLED: &str = "settings.preview_enabled";

/// Preference key holding the push broker endpoint.
pub const PREF_PUSH_SERVER: &str = "push.server_url";

/// Bucket and collection of the server's inventory monitor.
pub const MONITOR_BUCKET: &str = "monitor";
pub const MONITOR_COLLECTION: &str = "changes";

/// Maximum number of sync history entries retained by the reconciler.
pub const HISTORY_LIMIT: usize = 100;

/// Base and span of the synthetic `_expected` timestamp used to bypass
/// CDN caching when reading the monitor.
pub const CACHE_BUST_BASE: i64 = 99_990_000;
pub const CACHE_BUST_SPAN: i64 = 9_999;
