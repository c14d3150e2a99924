pub mod add_numbers;
pub mod echo;
pub mod sort_list;

pub use add_numbers::{AddNumbersParams, AddNumbersResult, AddNumbersTool};
pub use echo::{EchoParams, EchoTool};
pub use sort_list::{SortListParams, SortListTool};
