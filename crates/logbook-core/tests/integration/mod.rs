//! Integration test modules.

mod ids;
mod removal;
mod report_file;
