pub mod admin;
pub mod chat;
pub mod login;
pub mod session;
pub mod shop;
pub mod system;

use axum::{
    Router,
    routing::{get, post},
};
use deadpool_postgres::Pool;

/// Build the game and admin API routes
pub fn api_routes() -> Router<Pool> {
    Router::new()
        .route("/roblox-login/{roblox_id}", get(login::roblox_login))
        .route("/medical-case/start-session", get(session::start_session))
        .route("/chat-ai", post(chat::chat))
        .route("/shop/items", get(shop::list_items))
        .route("/buy-item", post(shop::buy_item))
        .route("/update-progress", post(shop::update_progress))
        // Admin seeding
        .route("/items", post(admin::create_item))
        .route("/medical-case", post(admin::create_case))
        .route("/achievements", post(admin::create_achievement))
        .route("/npc-presets", post(admin::create_preset))
        .route("/whitelist", post(admin::add_to_whitelist))
        .route("/users", post(admin::create_user))
}
