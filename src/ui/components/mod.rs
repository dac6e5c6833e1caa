pub mod kpi_card;
pub mod price_table;
pub mod toast;
