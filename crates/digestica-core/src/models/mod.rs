pub mod answer;
pub mod band;
pub mod condition;
pub mod diary;
pub mod patient;
pub mod result;
pub mod score;
