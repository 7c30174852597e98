pub use crate::address::Entity as Address;
pub use crate::favorite::Entity as Favorite;
pub use crate::menu_category::Entity as MenuCategory;
pub use crate::menu_item::Entity as MenuItem;
pub use crate::menu_item_customization::Entity as MenuItemCustomization;
pub use crate::opening_hour::Entity as OpeningHour;
pub use crate::order::Entity as Order;
pub use crate::order_item::Entity as OrderItem;
pub use crate::order_tracking::Entity as OrderTracking;
pub use crate::restaurant::Entity as Restaurant;
pub use crate::restaurant_image::Entity as RestaurantImage;
pub use crate::review::Entity as Review;
pub use crate::user::Entity as User;
