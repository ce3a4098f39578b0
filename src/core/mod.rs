pub mod ignore;
pub mod render;
pub mod walk;

pub use ignore::IgnoreSet;
pub use render::render_tree;
pub use walk::ScanOptions;
