use std::sync::Arc;

use nutripilot_core::application::NutripilotService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutripilotService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutripilotService) -> Self {
        Self { args, service }
    }
}
