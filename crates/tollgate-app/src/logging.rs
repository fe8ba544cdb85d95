use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for swapping the log filter once configuration is loaded.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global subscriber with an `info` filter and returns a handle
/// for replacing that filter later. Logs go to stderr.
pub fn init() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

/// ## Summary
/// Replaces the active filter with `level`, keeping the current one if the
/// directive does not parse.
pub fn apply_level(handle: &FilterHandle, level: &str) {
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping info");
    }
}
