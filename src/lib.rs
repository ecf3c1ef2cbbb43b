pub mod checks;
pub mod commands;
pub mod error;
pub mod gh;
pub mod git;
pub mod logging;
pub mod model;
pub mod process;
pub mod prompt;
pub mod stack;
pub mod ui;
pub mod workflows;
