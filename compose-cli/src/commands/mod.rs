mod control;
mod settings;
mod status;

// Settings commands
pub use settings::{list_services, select_services, show_settings, use_compose_file};

// Status commands
pub use status::{show_status, status_line, watch_status};

// Start / stop commands
pub use control::{start_services, stop_services, toggle_services};
