pub mod default;
pub mod layout;
pub mod list;
pub mod restore;
pub mod startup;
