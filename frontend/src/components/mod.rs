pub mod connect_wallet;
pub mod forms;
pub mod navbar;
pub mod parent_stipend_card;
pub mod progress_bar;
pub mod stipend_details_modal;
pub mod student_stipend_card;
pub mod summary_card;
pub mod toast_stack;
