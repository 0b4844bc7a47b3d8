//! Configuration storage adapter

pub mod xdg;

pub use xdg::XdgConfigStore;
