//! Interactive HTTP shell: the slider page, the generation worker and the router serving both.

/// Slider page served at `/`.
pub mod page;
/// Router, handlers and HTTP error mapping.
pub mod server;
/// Bounded background generation on the blocking pool.
pub mod worker;
