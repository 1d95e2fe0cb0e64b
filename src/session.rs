use actix_session::Session;

use crate::workflow::state::WorkflowState;

const FLASH_KEY: &str = "flash";
const WORKFLOW_KEY: &str = "workflow";

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Load the step completion map from the session. A fresh visitor gets a
/// fresh workflow with Receive active and nothing completed.
pub fn workflow_state(session: &Session) -> WorkflowState {
    session
        .get::<WorkflowState>(WORKFLOW_KEY)
        .unwrap_or(None)
        .unwrap_or_default()
}

pub fn save_workflow_state(session: &Session, state: &WorkflowState) {
    let _ = session.insert(WORKFLOW_KEY, state);
}
