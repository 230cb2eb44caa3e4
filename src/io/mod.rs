pub mod descriptions;
pub mod exclude;
pub mod json_writer;
pub mod plane;
pub mod summary;
pub mod tsv_writer;
