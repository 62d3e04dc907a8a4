pub mod catalog;
pub mod lambda;
pub mod nosql_database;
pub mod resource;
pub mod sql_database;
pub mod user;
pub mod virtual_machine;

pub use catalog::*;
pub use lambda::*;
pub use nosql_database::*;
pub use resource::*;
pub use sql_database::*;
pub use user::*;
pub use virtual_machine::*;
