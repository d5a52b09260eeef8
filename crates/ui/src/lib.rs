pub mod app;
pub mod layout;
pub mod pacer_view;
pub mod theme;
