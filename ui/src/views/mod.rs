mod dashboard;
mod history;
mod upload;

pub use dashboard::{ActivityRecord, ActivityStatus, DashboardPage, DashboardStats};
pub use history::HistoryPage;
pub use upload::UploadPage;
