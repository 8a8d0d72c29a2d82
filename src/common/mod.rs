pub mod consts;
pub mod version;

pub use version::VersionInfo;
