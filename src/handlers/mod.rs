// Handler modules
pub mod detect;
pub mod images;
pub mod init;
pub mod utils;

// Re-export all handler functions
pub use detect::handle_detect;
pub use images::handle_images;
pub use init::handle_init;
