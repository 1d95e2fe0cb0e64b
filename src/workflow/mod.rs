// Core wizard logic: the step registry, the per-visit completion map, the
// per-step validators, and the section list editor for the cut step.

pub mod forms;
pub mod sections;
pub mod state;
pub mod steps;
pub mod validate;
