//! Page components.

mod landing;
mod parent_dashboard;
mod student_dashboard;

pub use landing::LandingPage;
pub use parent_dashboard::ParentDashboardPage;
pub use student_dashboard::StudentDashboardPage;
