pub mod lifecycle_event;
