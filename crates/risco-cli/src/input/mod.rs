pub mod bands;
pub mod records;
pub mod table;
