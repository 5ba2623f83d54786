pub mod activities;
pub mod dashboard;
pub mod meetings;

pub use activities::ActivityService;
pub use dashboard::DashboardService;
pub use meetings::MeetingService;
