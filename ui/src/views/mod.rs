mod admin;
mod bulk;
mod dashboard;
mod history;
mod predict;

pub use admin::AdminDashboard;
pub use bulk::BulkPredict;
pub use dashboard::Dashboard;
pub use history::History;
pub use predict::Predict;
