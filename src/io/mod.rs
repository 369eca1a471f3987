//! Objects used to read and write Argumentation frameworks, answers to problems and analysis reports.

mod analysis_report;
pub use analysis_report::export_analysis_report;
pub use analysis_report::AnalysisReport;
pub use analysis_report::GroundedByPolicy;

mod dot_writer;
pub use dot_writer::DotWriter;

mod extension_writer;
pub use extension_writer::ExtensionWriter;

mod file_io;
pub use file_io::export_to_dot;
pub use file_io::export_to_json;
pub use file_io::export_to_tgf;
pub use file_io::import_from_json;
pub use file_io::import_from_tgf;
pub use file_io::write_atomically;

mod json_reader;
pub use json_reader::JsonReader;

mod json_writer;
pub use json_writer::JsonWriter;

mod specs;
pub use specs::FrameworkWriter;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod tgf_reader;
pub use tgf_reader::TgfReader;

mod tgf_writer;
pub use tgf_writer::TgfWriter;
