pub mod contact_info_screen;
pub mod state;

pub use contact_info_screen::*;
pub use state::*;
