pub mod window;
pub mod state;
pub mod view;
pub mod input;
pub mod host;
pub mod controller;

pub use window::*;
pub use state::*;
pub use view::*;
pub use input::*;
pub use host::*;
pub use controller::*;
