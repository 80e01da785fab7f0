pub mod aggregate;
pub mod args;
pub mod diagnostics_trace;
pub mod error;
pub mod files;
pub mod format;
pub mod junit;
pub mod pipeline;
pub mod render;
pub mod test_model;

#[cfg(test)]
mod diagnostics_trace_test;

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
