// Landing page sections, composed top-to-bottom in src/main.rs.

mod footer;
mod hero;
mod impact;
mod methodology;
mod nav;
mod tools;

pub use footer::Footer;
pub use hero::Hero;
pub use impact::Impact;
pub use methodology::Methodology;
pub use nav::Nav;
pub use tools::ToolStack;
