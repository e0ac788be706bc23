use fern::Dispatch;
use log::LevelFilter;

/// Install the global logger on stderr.
///
/// Level comes from `RUST_LOG` (`error`, `warn`, `info`, `debug`, `trace`),
/// defaulting to `warn` so outcome lines on stdout stay readable.
pub fn init() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    let result = Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("Failed to apply logger configuration: {e}");
    }
}
