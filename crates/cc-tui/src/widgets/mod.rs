pub mod card;
pub mod gauge_bar;
pub mod help_modal;
pub mod status_bar;
pub mod status_dot;
