pub mod smart_banner;
pub use smart_banner::SmartBanner;
