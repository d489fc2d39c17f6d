pub mod collect;
pub mod config;
pub mod error;
pub mod extract;
pub mod lines;
pub mod table;
pub mod traces;
// cmd and reports are binary modules; everything they need is re-exported here.

pub use collect::{Collector, MissingMarkerPolicy, MissingResultPolicy, Probe, ProbeReport};
pub use config::Config;
pub use error::{IpcError, IpcResult};
pub use extract::{Extractor, MetricPattern};
pub use table::IpcTable;
