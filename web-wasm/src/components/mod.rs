pub mod header;
pub mod settings_panel;
pub mod mode_switch;
pub mod upload_area;
pub mod crop_area;
pub mod query_form;
pub mod spinner;
pub mod results_grid;
pub mod design_codes;
pub mod heatmap;
pub mod threshold_filter;
pub mod data_table;
