pub mod forms;
pub mod school;
