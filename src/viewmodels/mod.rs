pub mod booking_viewmodel;

pub use booking_viewmodel::BookingViewModel;
