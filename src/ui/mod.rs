pub mod dialogs;
pub mod project_list;
pub mod stat_cards;
pub mod theme;
pub mod toolbar;
