//! Rendering helpers: buttons, styles and message bodies, plus the `Reply`
//! value every command and interaction produces.

pub mod buttons;
pub mod reply;
pub mod style;
pub mod text;

pub use reply::Reply;
