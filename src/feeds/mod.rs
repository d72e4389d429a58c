pub(crate) mod binlog;
pub(crate) mod classify;
pub(crate) mod convert;
pub(crate) mod filter;
pub(crate) mod png;
