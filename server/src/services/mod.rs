//! Domain services behind the HTTP routes.

pub mod attempts;
pub mod gate;
pub mod session;
