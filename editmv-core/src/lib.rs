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
pub mod editor;
pub mod listing;
pub mod plan;
pub mod preview;
pub mod session;

pub use apply::execute_plan;
pub use config::{Config, DefaultsConfig, PathMapping};
pub use editor::{launch_editor, map_path, resolve_editor, resolve_editor_with};
pub use listing::{capture_listing, EntryInfo};
pub use plan::{ApplyReport, PlanEntry, RenameOutcome, RenamePlan};
pub use preview::{
    render_apply_report, render_preview, should_use_color, should_use_color_with_detector,
};
pub use session::{
    default_edit_file_name, ApplyOutcome, RenameSession, SessionError, Validation,
    ValidationError, CONTROL_CHARACTERS, FORBIDDEN_CHARACTERS,
};
