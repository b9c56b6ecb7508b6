// src/application/dto/mod.rs
pub mod detail;
pub mod favorites;
pub mod view_state;

pub use detail::DetailView;
pub use favorites::FavoriteDto;
pub use view_state::ViewState;
