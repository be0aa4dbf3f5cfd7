mod docx_adapter;
pub mod wordml;

pub use docx_adapter::DocxAdapter;
