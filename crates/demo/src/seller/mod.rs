mod dashboard;
mod login;

pub use dashboard::SellerDashboard;
pub use login::SellerLoginModal;
