pub mod get_judge_context;
pub mod judge_chat;
pub mod judge_product;
