pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod migrate;
pub(crate) mod print;
pub(crate) mod serve;
