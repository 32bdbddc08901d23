pub mod use_assign_form;
pub mod use_clock;
pub mod use_stipend_board;
pub mod use_toasts;
pub mod use_wallet;
