// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;

/// Opens (or creates) the log file at `path_str`. The file is never rotated.
///
/// Writes go straight to the file. Wrapping the appender in
/// `tracing_appender::non_blocking` would lose lines that are still buffered when a
/// short lived thread local subscriber is dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            code = "arrayext::log::no_parent_folder",
            "Can't find the folder of log file {}",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            code = "arrayext::log::no_file_name",
            "Log file path {} does not end in a file name",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
