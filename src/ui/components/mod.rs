//! Reusable UI components shared across screens.

pub mod input_field;
pub mod tab_selector;

pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use tab_selector::{render_tab_selector, TabItem};
