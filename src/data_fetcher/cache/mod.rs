pub mod memo;

pub use memo::{CacheInfo, MemoCache};
