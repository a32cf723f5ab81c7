pub mod storage;
pub mod utils;

pub use storage::*;
pub use utils::*;
