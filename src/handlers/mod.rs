pub mod echo_handlers;
pub mod forum_handlers;
