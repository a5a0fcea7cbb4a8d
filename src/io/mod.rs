pub mod report;

pub use report::export_report;
