// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a [`tracing_subscriber`] that shows the resize events emitted by this crate.
//!
//! ```no_run
//! use arrayext::{FlatArrayOps, TracingConfig, init_tracing};
//! use tracing_core::LevelFilter;
//!
//! let config = TracingConfig::new_file("/tmp/arrayext.log")
//!     .with_level_filter(LevelFilter::TRACE);
//! let _guard = init_tracing(config).unwrap();
//!
//! let mut items = vec![1, 2, 3];
//! items.crop_to(10).unwrap(); // Logged to /tmp/arrayext.log.
//! ```

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig,
            rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    (ansi = $ansi:expr) => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_ansi($ansi)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs the subscriber described by `tracing_config`.
///
/// 1. [`TracingScope::Global`] sets the global default subscriber and returns `None`.
///    This fails if a global subscriber is already set.
/// 2. [`TracingScope::ThreadLocal`] sets the default for the current thread and returns
///    the guard. Dropping it restores the previous subscriber.
///
/// # Errors
///
/// Returns an error if the log file can't be opened, or if a global subscriber has
/// already been installed.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(&tracing_config)?;
    let subscriber = tracing_subscriber::registry().with(layers);

    match scope {
        TracingScope::Global => {
            subscriber.try_init().map_err(|err| {
                miette::miette!(
                    code = "arrayext::log::global_already_set",
                    "Can't install global tracing subscriber: {err}"
                )
            })?;
            Ok(None)
        }
        TracingScope::ThreadLocal => Ok(Some(subscriber.set_default())),
    }
}

/// Returns the layers without installing them. The first layer is the level filter,
/// followed by a display layer and a file layer when the [`WriterConfig`] asks for them.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];

    if let Some(layer) = try_create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }
    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// Erases the concrete type of the writer. `None` if the [`WriterConfig`] does not
/// display.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!(ansi = true);

    match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::File(_) => None,
    }
}

/// Erases the concrete type of the writer. `None` if the [`WriterConfig`] has no file.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!(ansi = false);

    Ok(match writer_config {
        WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
            let file = rolling_file_appender_impl::try_create(path)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::Display(_) => None,
    })
}
