pub mod element_type;
pub mod script_element;
pub mod scene;
pub mod character;
pub mod location;
pub mod page;
pub mod conf;

pub use element_type::ElementType;
pub use script_element::{ScriptElement, ExportElement};
pub use scene::Scene;
pub use character::Character;
pub use location::{Location, LocationKind};
pub use page::Page;
pub use conf::Conf;
