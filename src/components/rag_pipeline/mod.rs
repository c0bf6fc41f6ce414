mod component;
mod state;
mod timer;

pub use component::RagPipelineDiagram;
