// Application layer: front-end flows shared by the binaries.

#[cfg(feature = "cli")]
pub mod cli;
