// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where and how much to log. Pass it to [`crate::init_tracing`].
///
/// The library only emits `trace!` events when it resizes a sequence, so nothing shows
/// up unless `level_filter` is [`LevelFilter::TRACE`].
///
/// Nothing is read from the environment. The default is:
/// - `level_filter`: [`LevelFilter::INFO`]
/// - `writer_config`: [`WriterConfig::Display`] to [`DisplayPreference::Stderr`]
/// - `scope`: [`TracingScope::ThreadLocal`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
    pub scope: TracingScope,
}

/// `String` payloads are the path of the log file, eg: `/tmp/arrayext.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// - [`TracingScope::Global`] can only be installed once per process. Use it in apps.
/// - [`TracingScope::ThreadLocal`] lasts until the returned guard is dropped. Use it in
///   tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    ThreadLocal,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            scope: TracingScope::ThreadLocal,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn new_file(path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn new_file_and_display(
        path: impl Into<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(preferred_display, path.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
