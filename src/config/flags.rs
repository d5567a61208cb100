use std::time::Duration;

/// Typed lookups of startup flags by name. Unknown or absent names yield the
/// type's zero value; defaults are the source's business.
pub trait FlagSource {
    fn bool(&self, name: &str) -> bool;
    fn uint64(&self, name: &str) -> u64;
    fn int(&self, name: &str) -> i64;
    fn string(&self, name: &str) -> String;
    fn duration(&self, name: &str) -> Duration;
}

pub const NO_CONFIG: &str = "no-config";
pub const FILE_LIMIT: &str = "flimit";
pub const LEGACY: &str = "legacy";
pub const LEGACY_DELAY: &str = "legacy-delay";
pub const NO_SERVER: &str = "no-server";
pub const SERVER_OPEN: &str = "serv-open";
pub const SERVER_HOST: &str = "serv-host";
pub const SERVER_PORT: &str = "serv-port";
