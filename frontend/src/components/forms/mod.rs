pub mod assign_stipend_form;
