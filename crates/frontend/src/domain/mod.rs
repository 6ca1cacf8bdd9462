pub mod invoices;
pub mod items;
pub mod orders;
pub mod partners;
pub mod sales_entry;
