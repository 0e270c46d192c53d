pub mod attendances;

pub mod auth;

pub mod dashboard;

pub mod documents;

pub mod evaluations;

pub mod files;

pub mod frontend;

pub mod payments;

pub mod settings;

pub mod students;

pub mod system;

pub use attendances::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use dashboard::configure_dashboard_routes;
pub use documents::configure_document_routes;
pub use evaluations::configure_evaluation_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use payments::configure_payment_routes;
pub use settings::configure_settings_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
