pub mod animation;
pub mod compose;
pub mod layout;
pub mod theme;
pub mod toolbar;
pub mod widgets;
