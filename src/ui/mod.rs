mod command;
mod errors;
mod input;
mod render;

pub use command::{parse_line, Input};
pub use errors::InputError;
pub use input::spawn_input_reader;
pub use render::{render_banner, render_field, render_form, render_help, render_outcome};
