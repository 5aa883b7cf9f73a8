mod dashboard;
mod error;
mod location;
mod readings;
mod report;
mod types;

pub use error::AqiError;

pub use location::error::LocationError;
pub use location::location_query::*;

pub use readings::error::FetchError;
pub use readings::fetcher::*;

pub use report::*;

pub use types::category::AqiCategory;
pub use types::station::*;

pub use dashboard::terminal::TerminalSession;
pub use dashboard::widgets::*;
pub use dashboard::{is_quit_event, Dashboard};
