//! The dashboard shell: owns the layout engine and theme cascade, routes
//! actions to them, and keeps the render surface in sync.

mod core;
mod dispatch;
mod gestures;


pub use self::core::Dashboard;
