// Page templates
pub mod dashboard_template;

pub use dashboard_template::DashboardTemplate;
