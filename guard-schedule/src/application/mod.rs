pub mod board;
pub mod dto;
