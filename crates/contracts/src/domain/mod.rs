pub mod a001_category;
pub mod a002_vendor;
pub mod a003_user;
pub mod a004_product;
pub mod a005_booking;
pub mod a006_location;
pub mod a007_notification;
pub mod common;
