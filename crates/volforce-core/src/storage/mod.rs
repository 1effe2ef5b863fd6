mod format;
mod store;

pub use format::*;
pub use store::*;
