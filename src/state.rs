use crate::controller::Controller;

#[derive(Clone)]
pub struct AppState {
    pub controller: Controller,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }
}
