//! Export core modules shared by the file writers.

pub mod csv_core;
pub mod json_core;

#[cfg(feature = "excel")]
pub mod excel_core;
