pub use super::dish::Entity as Dish;
pub use super::order_line::Entity as OrderLine;
pub use super::user::Entity as User;
