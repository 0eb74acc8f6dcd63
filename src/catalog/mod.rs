// Module: catalog
pub use self::column::*;

use std::sync::Arc;

mod column;

pub type TableName = Arc<str>;
