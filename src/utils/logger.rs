use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Output shape of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Filter used when `RUST_LOG` is unset. `TraceLayer` logs requests at DEBUG.
pub fn default_directives(verbose: bool, http: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives = format!("small_notify={}", level);
    if http {
        directives.push_str(",tower_http=debug");
    }
    if verbose {
        directives.push_str(",info");
    }
    directives
}

fn fmt_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn init(directives: String, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(format))
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init(default_directives(verbose, false), LogFormat::Compact);
}

pub fn init_service_logger(json: bool) {
    let format = if json { LogFormat::Json } else { LogFormat::Compact };
    init(default_directives(false, true), format);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false, false), "small_notify=info");
        assert_eq!(default_directives(true, false), "small_notify=debug,info");
        assert_eq!(
            default_directives(false, true),
            "small_notify=info,tower_http=debug"
        );
    }

    #[test]
    fn test_directives_parse() {
        for (verbose, http) in [(false, false), (true, false), (false, true)] {
            assert!(EnvFilter::try_new(default_directives(verbose, http)).is_ok());
        }
    }
}
