//! UI Components
//!
//! Pages and reusable Leptos components.

mod delete_confirm_button;
mod image_panel;
mod item_detail_page;
mod item_list_page;
mod layout;
mod new_item_form;
mod todo_card;

pub use delete_confirm_button::DeleteConfirmButton;
pub use image_panel::ImagePanel;
pub use item_detail_page::ItemDetailPage;
pub use item_list_page::ItemListPage;
pub use layout::Layout;
pub use new_item_form::NewItemForm;
pub use todo_card::TodoCard;
