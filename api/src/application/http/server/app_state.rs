use std::sync::Arc;

use foodboot_core::application::FoodbootService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodbootService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodbootService) -> Self {
        Self { args, service }
    }
}
