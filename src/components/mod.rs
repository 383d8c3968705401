pub mod bid_dialog;
pub mod confirm_dialog;
pub mod filter_bar;
pub mod flash;
pub mod image_slider;
pub mod job_form;
pub mod nav;
pub mod rating;
pub mod task_card;
