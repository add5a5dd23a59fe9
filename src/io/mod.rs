pub mod json_report;
pub mod table_csv;
pub mod textgrid_tiers;
