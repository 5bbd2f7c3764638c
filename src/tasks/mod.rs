//! Background jobs started next to the web server.

pub mod session_sweeper;

pub use session_sweeper::spawn_session_sweeper;
