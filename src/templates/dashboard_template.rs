use askama::Template;

use crate::dashboard::{DashboardView, ListPanel};
use crate::handlers::helpers::TemplateGlobals;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub globals: TemplateGlobals,
    pub view: DashboardView,
}

impl DashboardTemplate {
    fn is_loading(&self) -> bool {
        matches!(self.view.panel, ListPanel::Loading)
    }
}
