pub mod app;
pub mod spinner;
pub mod login_screen;
pub mod nav_bar;
pub mod line_chart;
pub mod dashboard;
pub mod status_panel;

pub use app::App;
pub use spinner::{ErrorBanner, Spinner};
pub use login_screen::LoginScreen;
pub use nav_bar::{NavBar, Page};
pub use line_chart::LineChart;
pub use dashboard::Dashboard;
pub use status_panel::StatusPanel;
