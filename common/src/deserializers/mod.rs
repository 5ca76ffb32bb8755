pub mod level_filter;
