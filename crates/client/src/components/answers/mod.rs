pub mod answer_card;
pub mod answer_list;

pub use answer_card::*;
pub use answer_list::*;
