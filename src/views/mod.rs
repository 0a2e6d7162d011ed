pub mod app;
pub mod booking_card;
pub mod booking_list;
pub mod edit_modal;
pub mod notice;
pub mod restaurant_card;
pub mod restaurant_catalog;
pub mod top_menu;

pub use app::render_app;
pub use booking_card::render_booking_card;
pub use booking_list::{activate_booking_view, fill_booking_list, render_booking_list};
pub use edit_modal::render_edit_modal;
pub use notice::{notice_class, render_notice};
pub use restaurant_card::render_restaurant_card;
pub use restaurant_catalog::{activate_catalog_view, render_restaurant_catalog};
pub use top_menu::render_top_menu;
