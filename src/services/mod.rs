pub mod attendances;
pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod evaluations;
pub mod files;
pub mod payments;
pub mod settings;
pub mod students;
pub mod system;

pub use attendances::AttendanceService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use documents::DocumentService;
pub use evaluations::EvaluationService;
pub use files::FileService;
pub use payments::PaymentService;
pub use settings::SettingsService;
pub use students::StudentService;
pub use system::SystemService;
