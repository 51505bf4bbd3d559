use crate::board::ActivityBoard;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<ActivityBoard>,
}

impl AppState {
    pub fn new(board: ActivityBoard) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}
