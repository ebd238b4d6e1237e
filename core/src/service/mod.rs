pub mod aggregation;
pub mod dto;
