pub mod document_flow;
pub mod load_ticket;

pub use document_flow::{DocumentContent, DocumentFlow};
pub use load_ticket::LoadTicket;
