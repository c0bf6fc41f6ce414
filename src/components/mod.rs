pub mod efficiency_chart;
pub mod rag_pipeline;
pub mod security_mesh;
