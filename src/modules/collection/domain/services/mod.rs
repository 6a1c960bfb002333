pub mod preview_assembler;

pub use preview_assembler::assemble_previews;
