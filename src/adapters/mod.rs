// Adapters layer: concrete implementations for external systems (library servers, files).

pub mod enrichr;
pub mod gmt;
pub mod library_text;
pub mod storage;
