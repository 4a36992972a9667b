pub mod form;
pub mod list;
pub mod my_list;
pub mod table;
