#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod entry;
pub mod operations;
pub mod output;
pub mod plan;
pub mod preview;
pub mod resolve;

pub use apply::{apply_plan, MoveOutcome, MoveRecord, ShiftReport};
pub use config::Config;
pub use entry::{parse_log_name, scan_character_dir, LogEntry};
pub use operations::shift_operation;
pub use output::{OutputFormat, OutputFormatter, ShiftResult};
pub use plan::{
    format_log_name, plan_shift, ConflictKind, Direction, ShiftConflict, ShiftMove, ShiftPlan,
};
pub use preview::render_plan;
pub use resolve::{list_characters, resolve_character_dir, ResolveError};
