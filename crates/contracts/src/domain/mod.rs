pub mod dates;
pub mod document;
pub mod due;
pub mod item;
pub mod monthly;
pub mod normalize;
pub mod partner;
pub mod sales_entry;
