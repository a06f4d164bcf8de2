pub mod preference;
pub mod site;
