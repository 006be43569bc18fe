pub mod analysis_adapter;
