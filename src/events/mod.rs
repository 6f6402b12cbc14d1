pub mod hover;
pub mod wheel;

pub use hover::wire_region_menu;
pub use wheel::wire_wheel;
