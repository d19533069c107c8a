pub mod block;
pub mod block_type;
pub mod format;
pub(crate) mod lenient;
pub mod page;

pub use block::{Block, RawBlock};
pub use block_type::BlockType;
pub use format::*;
pub use page::{Collection, CollectionView, Page, Table, User};
