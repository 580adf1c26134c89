pub mod session;
pub mod ui;
pub mod view_model;

pub use session::{MountGuard, RentalsLoadState, RentalsReportSession, ReportError};
pub use ui::{RentalsReport, RentalsReportPage};
