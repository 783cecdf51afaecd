mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod geometry_pipeline;
mod interaction_controller;
mod layout_controller;
mod render_frame_builder;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
