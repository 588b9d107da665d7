pub mod console;
pub mod driver;
pub mod loader;
pub mod registry;
pub mod report;

pub use console::ConsoleHost;
pub use driver::run_to_completion;
pub use loader::{FileSource, LoadError};
pub use report::fault_report;
