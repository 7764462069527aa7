pub mod requests;
pub mod responses;

pub use requests::{AddWordRequest, DeleteWordQuery, EditWordRequest, GuessRequest, StartMatchRequest};
pub use responses::{CommandResponse, WordBankResponse, WordChangeResponse};
