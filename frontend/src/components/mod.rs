pub mod calendar;
pub mod header;
pub mod selected_day_panel;
