pub mod debounce;
pub mod format;
