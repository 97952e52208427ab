pub use super::auction::Entity as Auction;
pub use super::bid::Entity as Bid;
pub use super::offer::Entity as Offer;
pub use super::order::Entity as Order;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
