pub mod constant;
pub use constant::*;

pub mod meta_list;
pub use meta_list::*;

pub mod utils;
pub use utils::*;
