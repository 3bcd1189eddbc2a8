//! Plugin host implementations

mod static_host;

pub use static_host::StaticPluginHost;
