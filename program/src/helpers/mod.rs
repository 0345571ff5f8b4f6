pub mod constant;
pub mod extensions;
pub mod token;
pub mod utils;

pub use constant::*;
pub use extensions::*;
pub use token::*;
pub use utils::*;
