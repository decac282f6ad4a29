// ============================================================================
// ADMIN CONSOLE - FRONTEND YEW (RUST PURO)
// ============================================================================
// - Components: markup, sin lógica de negocio
// - Hooks: conectan el store con el trabajo async
// - Services: SOLO comunicación API + flujos de login/status
// - State: store central con reducers puros
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use components::App;
use config::CONFIG;

/// Inicializa panic hook + logging y monta la app en `<body>`
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));

    log::info!(
        "🚀 Admin Console starting (env: {}, api: {})",
        CONFIG.environment,
        CONFIG.api_url
    );

    yew::Renderer::<App>::new().render();
}
