pub use super::booking::Entity as Booking;
pub use super::feedback::Entity as Feedback;
pub use super::property::Entity as Property;
pub use super::user::Entity as User;
