pub mod loader;
pub mod reporter;
pub mod timing;

pub use loader::{load_graph_from_path, load_graph_from_reader, load_graph_from_str, load_graph_from_value};
pub use reporter::{DistanceReport, ReportFormat, Reporter};
pub use timing::{timed, Timed};
