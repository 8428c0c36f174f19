mod branches;
mod status;

// Status commands
pub use status::{check_prerequisites, run_status};

// Git commands
pub use branches::run_branches;
