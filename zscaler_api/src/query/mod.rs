mod common;
pub use self::common::{Chain, Query};

mod filter;
pub use self::filter::{Filter, PageRequest};

mod sort;
pub use self::sort::{SortField, SortOrder};
