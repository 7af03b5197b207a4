pub mod client;

pub use client::{NetworkProbe, NetworkVersion};
