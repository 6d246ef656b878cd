mod commands;
mod paths;
mod strings;

pub use commands::get_launch_command;
pub use paths::{absolute_or_given, some_if_dir};
pub use strings::{contains_ignore_case, decode_utf8_ignoring_invalid, ends_with_ignore_case};
