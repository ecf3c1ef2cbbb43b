pub mod table;

pub use table::{PrStatus, format_status, pr_status, render_stack};
